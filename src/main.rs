use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use distance::{
    hamming, jaccard, levenshtein, quick_distance, sorensen, to_code, try_filter_within_two,
    ByValue, Distance, Sequence,
};

mod cli;
use cli::display::{self, Hit};
use cli::input::{self, Candidate};
use cli::{Cli, Commands, Format, Unit};

/// Run `$func(&a, &b)` with both arguments converted to `$unit` elements.
macro_rules! dispatch_unit {
    ($unit:expr, $func:path, $a:expr, $b:expr) => {
        match $unit {
            Unit::Chars => $func(&input::chars($a), &input::chars($b)),
            Unit::Bytes => $func($a.as_bytes(), $b.as_bytes()),
            Unit::Words => $func(&input::words($a), &input::words($b)),
        }
    };
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("DISTANCE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    let colors = display::use_colors();

    match command {
        Commands::Hamming {
            first,
            second,
            normalized,
            unit,
        } => {
            let dist: Distance = dispatch_unit!(unit, hamming, &first, &second)?;
            print_distance(dist, normalized, colors);
        }
        Commands::Levenshtein {
            first,
            second,
            normalized,
            unit,
        } => {
            let dist: Distance = dispatch_unit!(unit, levenshtein, &first, &second)?;
            print_distance(dist, normalized, colors);
        }
        Commands::Quick {
            first,
            second,
            unit,
        } => {
            let result = dispatch_unit!(unit, quick_distance, &first, &second);
            println!("{}", display::distance(i64::from(to_code(result)), colors));
        }
        Commands::Jaccard {
            first,
            second,
            unit,
        } => {
            let value = dispatch_unit!(unit, jaccard, &first, &second);
            println!("{}", display::ratio(value));
        }
        Commands::Sorensen {
            first,
            second,
            unit,
        } => {
            let value = dispatch_unit!(unit, sorensen, &first, &second);
            println!("{}", display::ratio(value));
        }
        Commands::Filter {
            reference,
            input: path,
            json,
            sort,
            format,
            unit,
        } => {
            let reader: Box<dyn BufRead> = match &path {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    Box::new(BufReader::new(file))
                }
                None => Box::new(io::stdin().lock()),
            };
            let options = FilterOptions {
                sort,
                format,
                colors,
            };
            if json {
                input::each_json_candidate(reader, |candidates| {
                    filter_by_unit(&reference, candidates, unit, &options)
                })?;
            } else {
                filter_by_unit(&reference, input::lines(reader), unit, &options)?;
            }
        }
    }

    Ok(())
}

fn print_distance(dist: Distance, normalized: bool, colors: bool) {
    if normalized {
        println!("{}", display::ratio(dist.normalized()));
    } else {
        println!("{}", display::distance(dist.get() as i64, colors));
    }
}

struct FilterOptions {
    sort: bool,
    format: Format,
    colors: bool,
}

fn filter_by_unit<I>(
    reference: &str,
    candidates: I,
    unit: Unit,
    options: &FilterOptions,
) -> Result<()>
where
    I: Iterator<Item = Result<String>>,
{
    match unit {
        Unit::Chars => run_filter(reference, candidates, input::chars, options),
        Unit::Bytes => run_filter(reference, candidates, input::bytes, options),
        Unit::Words => run_filter(reference, candidates, input::words, options),
    }
}

fn run_filter<S, I>(
    reference: &str,
    candidates: I,
    to_units: fn(&str) -> S,
    options: &FilterOptions,
) -> Result<()>
where
    S: Sequence,
    S::Item: PartialEq,
    I: Iterator<Item = Result<String>>,
{
    let source = candidates.map(|text| text.map(|t| Candidate::new(t, to_units)));
    let filter = try_filter_within_two(to_units(reference), source, ByValue);

    // Unsorted text output streams: everything before a failure is printed
    if options.format == Format::Text && !options.sort {
        let mut stdout = io::stdout().lock();
        let mut kept = 0usize;
        for item in filter {
            let (distance, candidate) = item?;
            let hit = Hit {
                distance,
                candidate: candidate.text,
            };
            writeln!(stdout, "{}", display::hit_line(&hit, options.colors))?;
            kept += 1;
        }
        info!(kept, "filter finished");
        return Ok(());
    }

    let mut hits = filter
        .map(|item| {
            item.map(|(distance, candidate)| Hit {
                distance,
                candidate: candidate.text,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if options.sort {
        hits.sort_by_key(|hit| hit.distance);
    }
    debug!(kept = hits.len(), sorted = options.sort, "filter finished");

    match options.format {
        Format::Json => println!("{}", display::hits_json(&hits)?),
        Format::Text => {
            for hit in &hits {
                println!("{}", display::hit_line(hit, options.colors));
            }
        }
    }
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the distance command-line interface.
//!
//! One subcommand per metric, plus `filter` to prune a candidate list down to
//! the entries within two edits of a reference. Every command takes `--unit`
//! to pick what counts as one element: a character, a byte, or a
//! whitespace-separated word.

pub mod display;
pub mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "distance",
    about = "Hamming, Levenshtein and quick bounded edit distances",
    version
)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). DISTANCE_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// What counts as one element of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    /// Unicode scalar values
    Chars,
    /// Raw UTF-8 bytes
    Bytes,
    /// Whitespace-separated words
    Words,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count positions at which two equal-length sequences differ
    Hamming {
        first: String,
        second: String,

        /// Divide by the sequence length (0 = equal, 1 = totally different)
        #[arg(short, long)]
        normalized: bool,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },

    /// Minimum number of insertions, deletions and substitutions between two sequences
    Levenshtein {
        first: String,
        second: String,

        /// Divide by the longer length (0 = equal, 1 = totally different)
        #[arg(short, long)]
        normalized: bool,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },

    /// Edit distance if it is at most 2, otherwise -1
    Quick {
        first: String,
        second: String,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },

    /// Print the candidates within two edits of REFERENCE
    ///
    /// Candidates are read one per line, or as a JSON array of strings with
    /// --json. Output keeps input order unless --sort is given.
    Filter {
        reference: String,

        /// Read candidates from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input is a JSON array of strings
        #[arg(long)]
        json: bool,

        /// Order results by distance (ties keep input order)
        #[arg(long)]
        sort: bool,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },

    /// Jaccard distance between the element sets of two sequences
    Jaccard {
        first: String,
        second: String,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },

    /// Sørensen–Dice distance between the element sets of two sequences
    Sorensen {
        first: String,
        second: String,

        #[arg(short, long, value_enum, default_value_t = Unit::Chars)]
        unit: Unit,
    },
}

//! Custom cargo commands for the distance crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["quick_distance", "filter_stream"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = env::args()
                .nth(2)
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("fuzz duration must be a number of seconds")?
                .unwrap_or(30);
            fuzz(seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (tests + clippy + constants + contracts)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  fuzz [SECONDS]  Run each fuzz target for SECONDS (default 30, needs nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Distance Crate Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract calls...");
    check_contract_calls()?;
    println!("✓ Contract checks wired in\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying quick-distance constants...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for `seconds` each
fn fuzz(seconds: u64) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let limit = format!("-max_total_time={}", seconds);

    for (n, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {}...", n + 1, FUZZ_TARGETS.len(), target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &limit])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }

    println!("\n✓ No fuzz findings");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The engines must keep calling into `contracts`
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "check_", "--include=*.rs", "-l"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let files = String::from_utf8_lossy(&output.stdout);
    for required in ["metric.rs", "quick.rs", "levenshtein.rs"] {
        if !files.lines().any(|f| f.ends_with(required)) {
            bail!(
                "{} no longer calls any contract check. Someone may have removed the debug assertions!",
                required
            );
        }
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let contracts = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read contracts.rs")?;
    let quick =
        std::fs::read_to_string(root.join("src/quick.rs")).context("Failed to read quick.rs")?;

    let bound = extract_const(&contracts, "MAX_QUICK_DISTANCE");
    let sentinel = extract_const(&quick, "SENTINEL");

    if bound != Some(2) {
        bail!(
            "MAX_QUICK_DISTANCE = {:?}, the quick models only cover 2",
            bound
        );
    }
    if sentinel != Some(-1) {
        bail!("SENTINEL = {:?}, callers expect -1", sentinel);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<i64> {
    // Look for "pub const NAME: T = value;"
    content
        .lines()
        .find(|line| line.contains(&format!("const {}:", name)))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_end_matches(';').trim())
        .and_then(|value| value.parse::<i64>().ok())
}

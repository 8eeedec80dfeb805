use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "solo workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite once per feature set
    Test,
    /// Run the unit and integration tests under Miri
    Miri,
    /// Run the UniquePtr benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,
    },
}

const FEATURE_SETS: &[&[&str]] = &[&[], &["tracing"]];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => run_tests()?,
        Commands::Miri => run_miri()?,
        Commands::Bench { quick } => run_benchmarks(quick)?,
    }

    Ok(())
}

fn run_tests() -> Result<()> {
    for features in FEATURE_SETS {
        let label = if features.is_empty() { "default".to_string() } else { features.join(",") };
        println!("\n>>> Testing with features: {label}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("test");
        if !features.is_empty() {
            cmd.arg("--features").arg(features.join(","));
        }

        let status = cmd.status().with_context(|| format!("Failed to run tests for {label}"))?;
        if !status.success() {
            anyhow::bail!("Tests failed with features: {label}");
        }
        println!("Finished {label} in {:.2?}", start.elapsed());
    }

    Ok(())
}

fn run_miri() -> Result<()> {
    println!("Running tests under Miri...");

    let status = Command::new("cargo")
        .args(["+nightly", "miri", "test", "--lib", "--test", "unique_ptr_test"])
        .status()
        .context("Failed to launch cargo miri (is the nightly miri component installed?)")?;

    if !status.success() {
        anyhow::bail!("Miri reported a failure");
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", "unique_ptr_benchmark"]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let start = Instant::now();
    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        anyhow::bail!("Benchmarks failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

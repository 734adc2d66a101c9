use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stepmap::{apply_script, IntervalStore, StressConfig, StressHarness};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepmap", about = "Piecewise-constant interval store tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drive a store with random assignments and check every round.
    Stress {
        /// Number of assignment rounds.
        #[arg(long, default_value_t = 3500)]
        rounds: usize,
        /// RNG seed (random when omitted).
        #[arg(long)]
        seed: Option<u64>,
        /// Smallest key sampled.
        #[arg(long, default_value_t = -150, allow_negative_numbers = true)]
        key_min: i64,
        /// Largest key sampled.
        #[arg(long, default_value_t = 150, allow_negative_numbers = true)]
        key_max: i64,
        /// Print the final store.
        #[arg(long)]
        dump: bool,
    },
    /// Apply an assignment script (`<begin> <end> <value>` per line) and print the store.
    Replay {
        /// Script file.
        script: PathBuf,
        /// Base value of the store.
        #[arg(long, default_value_t = '.')]
        base: char,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stress {
            rounds,
            seed,
            key_min,
            key_max,
            dump,
        } => {
            let mut config = StressConfig::default()
                .with_rounds(rounds)
                .with_key_range(key_min, key_max);
            config.seed = seed;
            run_stress(config, dump)?
        }
        Commands::Replay { script, base } => run_replay(script, base)?,
    }

    Ok(())
}

fn run_stress(config: StressConfig, dump: bool) -> Result<()> {
    let mut harness = StressHarness::new(config).context("invalid stress configuration")?;
    let report = harness
        .run()
        .with_context(|| format!("stress run failed (seed {})", harness.seed()))?;

    println!(
        "seed={}\tbase={}\trounds={}\tapplied={}\trejected={}\tempty={}\tboundaries={}",
        report.seed,
        report.base,
        report.rounds,
        report.applied,
        report.rejected,
        report.empty,
        report.boundaries
    );
    println!("fingerprint={}", report.fingerprint);

    if dump {
        print!("{}", harness.store().snapshot());
    }

    Ok(())
}

fn run_replay(script_path: PathBuf, base: char) -> Result<()> {
    let reader = BufReader::new(File::open(&script_path).with_context(|| {
        format!("failed to open script {}", script_path.display())
    })?);

    let mut store = IntervalStore::new(base);
    let summary = apply_script(&mut store, reader)
        .with_context(|| format!("failed to replay {}", script_path.display()))?;

    let snapshot = store.snapshot();
    if let Err(violation) = snapshot.audit() {
        bail!("store lost canonical form: {}", violation);
    }

    println!(
        "applied={}\trejected={}\tempty={}",
        summary.applied, summary.rejected, summary.empty
    );
    print!("{}", snapshot);

    Ok(())
}

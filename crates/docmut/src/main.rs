use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use docmut_core::config::Config;
use docmut_core::corrupt::CorruptMode;
use docmut_core::pipeline::{run_mutations, MutateOptions};

#[derive(Parser)]
#[command(
    name = "docmut",
    version,
    about = "Mutate document files into degraded dataset variants"
)]
struct Args {
    /// Files or directories to mutate
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
    /// Output directory (default: alongside each input)
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Seed for deterministic randomness
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Report intended actions without writing anything
    #[arg(long)]
    dry_run: bool,
    /// Copy each file under a random name
    #[arg(long)]
    rename: bool,
    /// Produce metadata-stripped copies
    #[arg(long)]
    stripmeta: bool,
    /// Produce header-corrupted copies
    #[arg(long)]
    corrupt: bool,
    /// Produce copies under a mismatched extension
    #[arg(long)]
    mismatch: bool,
    /// Enable all four stages
    #[arg(long)]
    all: bool,
    /// Header corruption mode
    #[arg(long, default_value = "flip", value_parser = ["flip", "zero", "truncate"])]
    mode: String,
    /// Header corruption byte count
    #[arg(long, default_value_t = 8, value_name = "INT")]
    bytes: usize,
    /// Print the run report as pretty JSON
    #[arg(long)]
    json: bool,
    /// Options overlay file (TOML or YAML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,docmut=info,docmut_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let mode = CorruptMode::from_name(&args.mode)
        .ok_or_else(|| anyhow!("unknown corruption mode: {}", args.mode))?;
    let mut options = MutateOptions {
        rename: args.rename || args.all,
        strip_metadata: args.stripmeta || args.all,
        corrupt: args.corrupt || args.all,
        mismatch: args.mismatch || args.all,
        out_dir: args.out,
        mode,
        corrupt_bytes: args.bytes,
        dry_run: args.dry_run,
        ..MutateOptions::default()
    };
    if let Some(path) = args.config.as_deref() {
        let cfg = Config::load(path)?;
        cfg.apply(&mut options);
    }
    if !options.any_stage_enabled() {
        warn!("no mutation stages enabled; nothing to do");
    }
    if let Some(dir) = options.out_dir.as_deref() {
        if !options.dry_run {
            fs::create_dir_all(dir)?;
        }
    }
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let report = run_mutations(&args.paths, &options, &mut rng)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for file in &report.files {
            for record in &file.stages {
                println!(
                    "{} {} -> {}",
                    record.stage,
                    file.input.display(),
                    record.output.display()
                );
            }
        }
    }
    Ok(())
}

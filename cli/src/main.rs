use std::{fs, io};
use std::io::Read;
use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use log::error;
use rayon::prelude::*;

use recon::input;

/// Reconstructs the hidden secret of each given share file from its
/// threshold set of base-encoded Shamir shares.
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Enables debug output. Multiple occurrences increase its verbosity
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    #[clap(short, long, value_name = "RAYON_THREADS")]
    rayon_threads: Option<usize>,

    /// Share files to process; one secret is printed per file. If none are
    /// given, a single document is read from STDIN.
    #[clap(parse(from_os_str), value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn read_to_string(path: &Option<PathBuf>) -> Result<String> {
    Ok(match path {
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        },
        Some(f) => fs::read_to_string(f)?
    })
}

fn run_label(path: &Option<PathBuf>) -> String {
    match path {
        None => "<stdin>".to_string(),
        Some(f) => f.display().to_string(),
    }
}

/// One isolated reconstruction run: read, parse, select, interpolate.
fn reconstruct_one(path: &Option<PathBuf>) -> Result<String> {
    let contents = read_to_string(path)?;
    let doc = input::parse_document(&contents)?;
    let secret = recon::reconstruct_secret(&doc)?;
    Ok(secret.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        _ => log::Level::Debug,
    };
    simple_logger::init_with_level(level).expect("Initializing logger failed!");

    if let Some(num_threads) = cli.rayon_threads {
        rayon::ThreadPoolBuilder::new().num_threads(num_threads).build_global()?;
    }

    let runs: Vec<Option<PathBuf>> = if cli.files.is_empty() {
        vec![None]
    } else {
        cli.files.into_iter().map(Some).collect()
    };

    // Runs are independent; a bad file is reported and must not stop the rest.
    let failures: usize = runs
        .par_iter()
        .map(|path| match reconstruct_one(path) {
            Ok(secret) => {
                println!("{}: {}", run_label(path), secret);
                0
            }
            Err(err) => {
                error!("{}: {:#}", run_label(path), err);
                1
            }
        })
        .sum();

    ensure!(failures == 0, "{} of {} runs failed!", failures, runs.len());
    Ok(())
}

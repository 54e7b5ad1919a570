use clap::{Parser, Subcommand};
use lanevec::{Vector, conformance::run_conformance, fs::load_lanes_from_npy};
use serde::Serialize;
use std::{
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{error, info};

/// Fixed-width lane vectors: conformance checking and batch reductions
#[derive(Parser, Debug)]
#[command(name = "lanevec")]
#[command(about = "Checks wide lane vectors against the one-lane reference", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare every operation at the given widths against the one-lane reference
    Check {
        /// Lane widths to check (comma-separated list of 1, 2, 4, 8, 16)
        #[arg(short, long, value_delimiter = ',', default_value = "1,2,4,8,16")]
        width: Vec<usize>,

        /// Number of randomized rounds per width
        #[arg(short, long, default_value_t = 1000)]
        rounds: usize,

        /// Seed of the random inputs
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Print the full reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sum, minimum and maximum of the values of a f32 .npy file
    Reduce {
        /// Path to the values file (numpy format, 1-D or 2-D)
        #[arg(short, long)]
        input: PathBuf,

        /// Lane width used for the reduction
        #[arg(short, long, default_value_t = 8)]
        width: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct ReduceSummary {
    width: usize,
    values: usize,
    sum: f32,
    min: f32,
    max: f32,
}

macro_rules! dispatch_width {
    ($width:expr, $f:ident($($arg:expr),*)) => {
        match $width {
            1 => Ok($f::<1>($($arg),*)),
            2 => Ok($f::<2>($($arg),*)),
            4 => Ok($f::<4>($($arg),*)),
            8 => Ok($f::<8>($($arg),*)),
            16 => Ok($f::<16>($($arg),*)),
            other => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("unsupported lane width {other}, expected one of 1, 2, 4, 8, 16"),
            )),
        }
    };
}

fn reduce<const N: usize>(input: &Path) -> Result<ReduceSummary> {
    let buffer = load_lanes_from_npy::<N>(input)?;
    info!(
        values = buffer.len,
        vectors = buffer.lanes.len(),
        "loaded {}",
        input.display()
    );

    let mut sums = Vector::<f32, N>::zero();
    let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
    for (i, lanes) in buffer.lanes.iter().enumerate() {
        let valid = buffer.valid(i);
        sums += *lanes;
        min = min.min(lanes.min_masked(valid));
        max = max.max(lanes.max_masked(valid));
    }

    Ok(ReduceSummary {
        width: N,
        values: buffer.len,
        sum: sums.sum(),
        min,
        max,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::other)
}

fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Check {
            width,
            rounds,
            seed,
            json,
        } => {
            let mut reports = Vec::with_capacity(width.len());
            for &w in &width {
                reports.push(dispatch_width!(w, run_conformance(rounds, seed))?);
            }

            if json {
                println!("{}", to_json(&reports)?);
            } else {
                for report in &reports {
                    println!(
                        "width {:>2}: {} lanes checked, {} mismatches",
                        report.width,
                        report.total_checks(),
                        report.total_mismatches()
                    );
                    for op in report.failing_operations() {
                        println!("  failing: {op}");
                    }
                }
            }

            let clean = reports.iter().all(|r| r.is_clean());
            if !clean {
                error!("conformance check failed");
            }
            Ok(clean)
        }
        Command::Reduce { input, width, json } => {
            let summary = dispatch_width!(width, reduce(&input))??;
            if json {
                println!("{}", to_json(&summary)?);
            } else {
                println!(
                    "{} values: sum {}, min {}, max {}",
                    summary.values, summary.sum, summary.min, summary.max
                );
            }
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

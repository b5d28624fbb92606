use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use topsis::{rank_alternatives, validate, ResultOptions, TopsisError};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Rank alternatives by closeness to the ideal solution (TOPSIS).
#[derive(Parser)]
#[command(name = "topsis", version, about)]
struct Cli {
    /// Comma-separated table with a header row. The first column identifies each alternative,
    /// the remaining columns are numeric criteria.
    input: PathBuf,

    /// One positive weight per criterion, separated by commas (e.g. "1,1,2").
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// One impact per criterion, '+' (higher is better) or '-' (lower is better).
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Where to write the ranked table.
    output: PathBuf,

    /// Write the weighted normalized matrix in place of the input's criterion values.
    #[arg(long)]
    weighted_matrix: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            if let Some(kind) = err.kind().as_str() {
                eprintln!("Error: {kind}");
            }
            eprintln!("Error: {}", TopsisError::WrongArgumentCount);
            return ExitCode::FAILURE;
        }
    };

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "ranking failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), TopsisError> {
    let problem = validate(&cli.input, &cli.weights, &cli.impacts)?;
    println!("All inputs are valid!");
    debug!(criteria = ?problem.criteria, "parsed criteria");

    let options = ResultOptions {
        weighted_matrix: cli.weighted_matrix,
    };
    let result = rank_alternatives(problem, options);
    result.write(&cli.output)?;
    println!("Results saved to '{}'.", cli.output.display());
    Ok(())
}

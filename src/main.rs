use std::{error::Error, io::{self, BufRead, Write}, process};

use clap::Parser;
use horner::Session;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "horner", version, about = "Evaluate a polynomial at a point with Horner's method", long_about = None)]
struct Cli {
    /// Coefficients from the highest power to the constant term, e.g. "1 -3 2".
    /// Prompted for when not given.
    #[arg(short = 'c', long = "coefficients", allow_hyphen_values = true)]
    coefficients: Option<String>,
    /// Evaluation point. Prompted for when not given.
    #[arg(short = 'x', long = "point", allow_hyphen_values = true)]
    point: Option<String>,
}

fn run<R: BufRead, W: Write>(cli: &Cli, reader: R, writer: W) -> Result<f64, Box<dyn Error>> {
    Session::new(reader, writer).run(cli.coefficients.as_deref(), cli.point.as_deref())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli, io::stdin().lock(), io::stdout()) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

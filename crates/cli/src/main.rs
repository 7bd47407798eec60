//! Binary entry point for the transcript formatter.

use anyhow::{bail, Result};
use clap::Parser;
use cueform_core::pipeline::process_file;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Command line options for the binary.
#[derive(Parser)]
struct Cli {
    /// Enable verbose debug and trace logs.
    #[arg(long)]
    debug: bool,

    /// Path to the transcript file. When omitted, the path is asked for
    /// interactively.
    input: Option<PathBuf>,
}

/// Application entry point which parses CLI args and performs actions.
/// This function should initialize logging and delegate to the core library.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.debug {
        EnvFilter::default()
            .add_directive("cueform=trace".parse().unwrap())
            .add_directive("cueform_core=trace".parse().unwrap())
            .add_directive("info".parse().unwrap())
    } else {
        EnvFilter::default()
            .add_directive("cueform=info".parse().unwrap())
            .add_directive("cueform_core=info".parse().unwrap())
            .add_directive("warn".parse().unwrap())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let input = match cli.input {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let out = process_file(&input)?;
    println!("Formatted subtitle file saved: {}", out.display());
    Ok(())
}

/// Ask the user for the transcript path on stdin.
/// Surrounding quote characters are stripped from the answer.
fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter the full path to the transcript .txt file (surrounding quotes are removed): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let path = answer.trim().trim_matches('"');
    if path.is_empty() {
        bail!("no input path provided");
    }
    Ok(PathBuf::from(path))
}

//! Tape sort CLI - Sort integer records from one tape onto another.
//!
//! Usage:
//!   tapesort                           # sort input_tape.txt -> output_tape.txt.out
//!   tapesort data.txt                  # sort data.txt -> output_tape.txt.out
//!   tapesort data.txt sorted.txt       # choose the output tape
//!   tapesort --config delays.json      # override the per-operation delays
//!
//! The input tape is a file of whitespace-separated integers. The sorted
//! records land in the output tape's `.out` store, one per line, freshly
//! created each run. Delays default to 100/100/500/100 ms for
//! write/read/rewind/shift.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tape_core::{Delays, FileTape, TapeResult, TapeSorter};

/// Tape sort utility
#[derive(Parser, Debug)]
#[command(name = "tapesort")]
#[command(about = "Sort records from an input tape onto an output tape")]
struct Args {
    /// Input tape file (whitespace-separated integer records)
    #[arg(default_value = "input_tape.txt")]
    input: PathBuf,

    /// Output tape file (sorted records land in <output>.out)
    #[arg(default_value = "output_tape.txt")]
    output: PathBuf,

    /// JSON file with delay settings (write-delay, read-delay,
    /// rewind-delay, shift-delay; milliseconds)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn run(args: &Args) -> TapeResult<u64> {
    let delays = match &args.config {
        Some(path) => Delays::from_path(path)?,
        None => Delays::default(),
    };

    let mut input = FileTape::open(&args.input, delays)?;
    let mut output = FileTape::create(&args.output, delays)?;

    let count = TapeSorter::new(&mut input, &mut output).sort()?;
    output.flush()?;
    Ok(count)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Existence check gates the whole run; no tape is constructed and no
    // output store is touched when the input medium is missing.
    if !args.input.exists() {
        eprintln!(
            "Input tape file not found or could not be opened: {}",
            args.input.display()
        );
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(count) => {
            println!("Sorting completed! {count} records written.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Print the format of font files
//!
//! Each file is identified independently, so files are processed in
//! parallel; results are printed in the order the files were given.

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use rayon::prelude::*;

use fontsniff::{format_result, identify_path, Options, OutputStyle};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Identify files by their contents only, even if the extension implies a
    /// format
    #[arg(long)]
    no_extension: bool,

    /// Print one JSON object per file
    #[arg(long, conflicts_with = "print_paths")]
    json: bool,

    /// Print the path of each file before its format
    #[arg(long)]
    print_paths: bool,

    /// Log debug messages (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Font files to identify (may use glob syntax)
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Args {
    fn output_style(&self) -> OutputStyle {
        if self.json {
            OutputStyle::Json
        } else if self.print_paths {
            OutputStyle::PathAndLabel
        } else {
            OutputStyle::Label
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse_from(wild::args());
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = Options {
        ignore_extension: args.no_extension,
    };
    let style = args.output_style();
    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|path| identify_path(path, options))
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut all_identified = true;
    for (path, result) in args.files.iter().zip(&results) {
        if let Some(line) = format_result(path, result, style) {
            if let Err(e) = writeln!(stdout, "{line}") {
                log::error!("failed to write output: {e}");
                return ExitCode::FAILURE;
            }
        }
        if let Err(e) = result {
            all_identified = false;
            eprintln!("{e}");
        }
    }

    if all_identified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

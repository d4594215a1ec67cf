//! TinyLang driver: loads a source file (splicing imports), parses and
//! runs it, and reports any error to stderr with a fixed prefix (§6.1).
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use tinylang::run_file;

/// Run a TinyLang source file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the TinyLang source file to run.
    #[arg(default_value = "sample.tl")]
    file: PathBuf,

    /// Raise the log level to trace diagnostic output from the lexer,
    /// parser, and interpreter.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();

    let level = if args.verbose { LevelFilter::Trace } else { LevelFilter::Warn };
    simple_logger::init_with_level(level.to_level().unwrap_or(log::Level::Warn)).unwrap();

    if let Err(err) = run_file(&args.file) {
        eprintln!("tinylang: error: {err}");
        std::process::exit(1);
    }
}

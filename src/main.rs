// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ino_doc_validator::{ScanConfig, output, validate_tree};

/// Validate the leading header comments of example sketches.
///
/// Recursively scans the given directory for `.ino` files and fails unless
/// every one opens with a `/* ... */` comment of at least four `*`-prefixed
/// lines.
#[derive(Parser, Debug)]
#[command(name = "ino-doc-validator", version)]
struct Cli {
    /// Root directory to scan for .ino files.
    directory_path: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ScanConfig::new(cli.directory_path);
    let report = validate_tree(&config)?;

    if report.ok {
        output::write_human(&report, &mut io::stdout())?;
    } else {
        output::write_human(&report, &mut io::stderr())?;
        std::process::exit(1);
    }
    Ok(())
}

//! safecp - No-clobber file copy
//!
//! A single-file copy command powered by the safecp library. The
//! destination must not exist; safecp never overwrites.

use clap::Parser;
use safecp::{CopyOptions, CopyStats, copy_file};
use std::path::PathBuf;

/// safecp - copy one file without clobbering
///
/// Copies SOURCE to DESTINATION through a fixed 2 MiB buffer, creating
/// the destination with the source's permission bits. Refuses to run if
/// DESTINATION already exists in any form.
#[derive(Parser, Debug)]
#[command(name = "safecp", version, about, long_about = None)]
struct Args {
    /// Source file
    source: PathBuf,

    /// Destination path (must not exist)
    destination: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("safecp: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> safecp::Result<CopyStats> {
    let options = CopyOptions::default()
        .with_notice_handler(|line| println!("{line}"))
        .with_warn_handler(|msg| eprintln!("safecp: warning: {msg}"));

    copy_file(&args.source, &args.destination, &options)
}

use std::path::PathBuf;

use clap::Parser;

use connectz::{replay_file, report_code};

/// Check a recorded Connect Z game.
#[derive(Parser)]
#[command(
    name = "connectz",
    about = "Check a recorded Connect Z game and print its result code"
)]
struct Cli {
    /// Path to the move log: a dimensions header, then one column per line
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Every result, including an unreadable file, becomes a single code on
    // stdout with a zero exit status.
    let result = replay_file(&cli.file);
    println!("{}", report_code(&result));
}

//! cadiff CLI
//!
//! Command-line interface for comparing two cadnano design files

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cadiff")]
#[command(about = "Show differences between two cadnano files", long_about = None)]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::diff::execute(cli.diff) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

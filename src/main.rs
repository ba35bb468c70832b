//! CLI entry point for the Mondrian-style painting generator

use clap::Parser;
use pimondrian::io::cli::{Cli, Studio};

fn main() -> pimondrian::Result<()> {
    let cli = Cli::parse();
    let mut studio = Studio::new(cli);
    studio.process().map(|_| ())
}

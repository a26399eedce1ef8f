//! CLI entry point for the lattice debug renderer

use clap::Parser;
use gridlattice::io::cli::{Cli, init_tracing, run};

fn main() -> gridlattice::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    run(&cli).map(|_| ())
}

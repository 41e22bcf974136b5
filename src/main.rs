//! CLI entry point for replaying grid command scripts

use arraygrid::io::cli::{Cli, ScriptRunner};
use clap::Parser;

fn main() -> arraygrid::Result<()> {
    let cli = Cli::parse();
    let mut runner = ScriptRunner::new(cli);
    runner.process()
}

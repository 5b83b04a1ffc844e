//! QuickNotify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use quick_notify::cli::{app::run, args::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(cli)
}

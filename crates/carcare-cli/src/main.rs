//! Carcare - vehicle maintenance tracker
//!
//! A CLI tool that keeps service history per car and reports upcoming
//! maintenance and yearly costs.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

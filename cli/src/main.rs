mod cli;
mod output;

use bmhtml::{config, error::Result};
use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    // Initialize logger
    env_logger::init();

    if let Err(e) = run(args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(args: cli::Cli) -> Result<()> {
    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    cli::handle_args(args, &cfg)
}

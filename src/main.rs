//! Camp - declarative environment manager
//!
//! Reads a camp.yml declaring packages, environment variables, and external
//! flakes, validates it, and generates the flake.nix consumed by nix-darwin
//! (macOS) or home-manager (Linux).

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod flake;
mod generator;
mod identity;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check => commands::check::run(cli.config),
        Commands::Generate(args) => commands::generate::run(cli.config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

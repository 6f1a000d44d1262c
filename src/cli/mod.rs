//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// Camp - declarative environment manager
///
/// Compiles camp.yml into a Nix flake wiring external flakes, packages, and
/// environment variables into one generated configuration.
#[derive(Parser, Debug)]
#[command(
    name = "camp",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Declarative environment manager backed by Nix flakes",
    long_about = "Camp reads a camp.yml declaring packages, environment variables, and external \
                  flakes, validates it, and generates the flake.nix consumed by nix-darwin or \
                  home-manager.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  camp check                             \x1b[90m# Validate camp.yml\x1b[0m\n   \
                  camp check -c ./camp.yml               \x1b[90m# Validate a specific file\x1b[0m\n   \
                  camp generate                          \x1b[90m# Write ~/.camp/nix/flake.nix\x1b[0m\n   \
                  camp generate -o ./flake.nix           \x1b[90m# Write to a custom path\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .camp.yml, then ~/.camp/camp.yml)
    #[arg(long, short = 'c', global = true, env = "CAMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the configuration and report the first violation
    Check,

    /// Generate flake.nix from the configuration
    Generate(GenerateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

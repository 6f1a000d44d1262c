//! Generate command arguments

use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Destination for the generated flake.nix (defaults to ~/.camp/nix/flake.nix)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

//! Generate command implementation
//!
//! The whole environment-preparation cycle: fresh configuration load,
//! validation, identity detection, compile, splice, write.

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::commands::helpers::resolve_config_path;
use crate::config::CampConfig;
use crate::error::Result;
use crate::generator;
use crate::identity::Identity;

/// Generate flake.nix from the configuration
pub fn run(config_path: Option<PathBuf>, args: GenerateArgs) -> Result<()> {
    let path = resolve_config_path(config_path)?;
    let config = CampConfig::load(&path)?;
    let identity = Identity::detect()?;

    let dest = args
        .output
        .unwrap_or_else(|| generator::default_output_path(&identity.home));

    generator::write(&config, &identity, &dest)?;
    println!("Generated {}", dest.display());

    Ok(())
}

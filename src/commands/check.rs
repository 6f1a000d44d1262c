//! Check command implementation

use std::path::PathBuf;

use crate::commands::helpers::resolve_config_path;
use crate::config::CampConfig;
use crate::error::Result;

/// Load and validate the configuration, reporting the first violation
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_config_path(config_path)?;
    let config = CampConfig::load(&path)?;

    println!(
        "Configuration OK: {} ({} packages, {} flakes)",
        path.display(),
        config.packages.len(),
        config.flakes.len()
    );

    Ok(())
}

//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::config::CampConfig;
use crate::error::{CampError, Result};

/// Resolve the configuration path for a command
///
/// An explicit path wins; otherwise the nearest `.camp.yml` up from the
/// current directory, then the user configuration under `~/.camp` (`.yml`
/// preferred over `.yaml`). The resolved path may not exist, in which case
/// loading yields the default configuration.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(found) = CampConfig::find_project_config(&cwd) {
            return Ok(found);
        }
    }

    let camp_dir = dirs::home_dir()
        .ok_or(CampError::HomeDirNotFound)?
        .join(".camp");

    let yml = camp_dir.join("camp.yml");
    let yaml = camp_dir.join("camp.yaml");
    if !yml.exists() && yaml.exists() {
        Ok(yaml)
    } else {
        Ok(yml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/custom/camp.yml");
        let resolved = resolve_config_path(Some(explicit.clone())).unwrap();
        assert_eq!(resolved, explicit);
    }
}

//! Camp configuration (camp.yml) loading and validation
//!
//! A configuration is read fresh, validated immediately, and treated as
//! immutable for the rest of the generate cycle. A missing file is not an
//! error; it loads as the empty default configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CampError, Result};
use crate::flake::ident::is_valid_package_name;
use crate::flake::{Flake, validate_flakes};

/// Camp configuration from camp.yml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CampConfig {
    /// Environment variables exported into the generated environment
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Nix packages to install
    #[serde(default)]
    pub packages: Vec<String>,

    /// External flakes to integrate
    #[serde(default)]
    pub flakes: Vec<Flake>,
}

impl CampConfig {
    /// Parse and validate a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from the given path
    ///
    /// A missing file yields the default configuration without error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|err| CampError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        let config: Self =
            serde_yaml::from_str(&contents).map_err(|err| CampError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the user configuration from `~/.camp/camp.yml`
    ///
    /// Prefers the `.yml` extension, falls back to `.yaml`, and yields the
    /// default configuration when neither exists.
    pub fn load_user(home: &Path) -> Result<Self> {
        let yml = home.join(".camp").join("camp.yml");
        let yaml = home.join(".camp").join("camp.yaml");

        if yml.exists() {
            Self::load(&yml)
        } else if yaml.exists() {
            Self::load(&yaml)
        } else {
            Ok(Self::default())
        }
    }

    /// Search for a `.camp.yml` project configuration
    ///
    /// Walks up the directory tree from `start` until one is found or the
    /// filesystem root is reached.
    pub fn find_project_config(start: &Path) -> Option<PathBuf> {
        let mut dir = start.canonicalize().ok()?;

        loop {
            let candidate = dir.join(".camp.yml");
            if candidate.exists() {
                return Some(candidate);
            }

            if !dir.pop() {
                return None;
            }
        }
    }

    /// Serialize and write the configuration, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| CampError::ConfigWriteFailed {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|err| CampError::ConfigWriteFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Validate the whole configuration, stopping at the first violation
    pub fn validate(&self) -> Result<()> {
        validate_flakes(&self.flakes)?;
        self.validate_packages()
    }

    /// Validate the package list: non-blank, valid charset, unique
    fn validate_packages(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();

        for (index, package) in self.packages.iter().enumerate() {
            if package.trim().is_empty() {
                return Err(CampError::EmptyPackageName { index });
            }

            if !is_valid_package_name(package) {
                return Err(CampError::InvalidPackageName {
                    name: package.clone(),
                });
            }

            if !seen.insert(package.as_str()) {
                return Err(CampError::DuplicatePackage {
                    name: package.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
env:
  EDITOR: nvim
packages:
  - ripgrep
  - python3Packages.requests
flakes:
  - name: nvim-config
    url: "github:user/nvim-config"
    outputs:
      - name: homeManagerModules.default
        type: home
"#;
        let config = CampConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.env.get("EDITOR").map(String::as_str), Some("nvim"));
        assert_eq!(config.packages.len(), 2);
        assert_eq!(config.flakes.len(), 1);
    }

    #[test]
    fn test_from_yaml_validates_flakes() {
        let yaml = r#"
flakes:
  - name: broken
    url: "github:user/broken"
    outputs: []
"#;
        let result = CampConfig::from_yaml(yaml);
        assert!(matches!(
            result.unwrap_err(),
            CampError::NoFlakeOutputs { .. }
        ));
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let temp = TempDir::new().unwrap();
        let config = CampConfig::load(&temp.path().join("camp.yml")).unwrap();
        assert!(config.env.is_empty());
        assert!(config.packages.is_empty());
        assert!(config.flakes.is_empty());
    }

    #[test]
    fn test_load_parse_failure_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("camp.yml");
        fs::write(&path, "flakes: [unclosed").unwrap();

        match CampConfig::load(&path).unwrap_err() {
            CampError::ConfigParseFailed { path: p, .. } => {
                assert!(p.contains("camp.yml"));
            }
            err => panic!("Expected ConfigParseFailed, got: {err}"),
        }
    }

    #[test]
    fn test_load_user_prefers_yml() {
        let temp = TempDir::new().unwrap();
        let camp_dir = temp.path().join(".camp");
        fs::create_dir_all(&camp_dir).unwrap();
        fs::write(camp_dir.join("camp.yml"), "packages: [ripgrep]\n").unwrap();
        fs::write(camp_dir.join("camp.yaml"), "packages: [fd]\n").unwrap();

        let config = CampConfig::load_user(temp.path()).unwrap();
        assert_eq!(config.packages, vec!["ripgrep".to_string()]);
    }

    #[test]
    fn test_load_user_falls_back_to_yaml() {
        let temp = TempDir::new().unwrap();
        let camp_dir = temp.path().join(".camp");
        fs::create_dir_all(&camp_dir).unwrap();
        fs::write(camp_dir.join("camp.yaml"), "packages: [fd]\n").unwrap();

        let config = CampConfig::load_user(temp.path()).unwrap();
        assert_eq!(config.packages, vec!["fd".to_string()]);
    }

    #[test]
    fn test_load_user_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        let config = CampConfig::load_user(temp.path()).unwrap();
        assert!(config.flakes.is_empty());
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".camp.yml"), "packages: []\n").unwrap();
        let nested = temp.path().join("deep/nested/dir");
        fs::create_dir_all(&nested).unwrap();

        let found = CampConfig::find_project_config(&nested).unwrap();
        assert!(found.ends_with(".camp.yml"));
    }

    #[test]
    fn test_find_project_config_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(CampConfig::find_project_config(temp.path()).is_none());
    }

    #[test]
    fn test_save_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/camp.yml");

        let mut config = CampConfig::default();
        config.packages.push("ripgrep".to_string());
        config
            .env
            .insert("EDITOR".to_string(), "nvim".to_string());
        config.save(&path).unwrap();

        let loaded = CampConfig::load(&path).unwrap();
        assert_eq!(loaded.packages, vec!["ripgrep".to_string()]);
        assert_eq!(loaded.env.get("EDITOR").map(String::as_str), Some("nvim"));
    }

    #[test]
    fn test_validate_packages_blank() {
        let config = CampConfig {
            packages: vec!["ripgrep".to_string(), "   ".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            CampError::EmptyPackageName { index: 1 }
        ));
    }

    #[test]
    fn test_validate_packages_bad_charset() {
        let config = CampConfig {
            packages: vec!["bad name".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            CampError::InvalidPackageName { .. }
        ));
    }

    #[test]
    fn test_validate_packages_duplicate() {
        let config = CampConfig {
            packages: vec!["ripgrep".to_string(), "ripgrep".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            CampError::DuplicatePackage { .. }
        ));
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(CampConfig::default().validate().is_ok());
    }
}

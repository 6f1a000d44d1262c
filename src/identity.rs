//! Identity of the current user and machine
//!
//! The compiler treats these values as opaque strings; detection is the only
//! part of camp that looks at the host system.

use std::env;
use std::fs;

use crate::error::{CampError, Result};

/// The automatically supplied identity arguments plus the platform tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Current OS user name (`userName` in generated modules)
    pub user_name: String,

    /// Machine host name (`hostName` in generated modules)
    pub host_name: String,

    /// Home directory path (`home` in generated modules)
    pub home: String,

    /// `darwin` or `linux`; selects the generated flake skeleton
    pub platform: String,
}

impl Identity {
    /// Detect identity from the host system
    ///
    /// User from `$USER` (or `$USERNAME`), host name from `$HOSTNAME` with
    /// `/etc/hostname` as fallback, home directory via [`dirs::home_dir`].
    pub fn detect() -> Result<Self> {
        let user_name = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .map_err(|_| CampError::UserNameNotFound)?;

        let host_name = detect_host_name().ok_or(CampError::HostNameNotFound)?;

        let home = dirs::home_dir()
            .ok_or(CampError::HomeDirNotFound)?
            .display()
            .to_string();

        Ok(Self {
            user_name,
            host_name,
            home,
            platform: platform_tag().to_string(),
        })
    }
}

fn detect_host_name() -> Option<String> {
    if let Ok(name) = env::var("HOSTNAME") {
        let name = name.trim().to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }

    let contents = fs::read_to_string("/etc/hostname").ok()?;
    let name = contents.trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}

/// Map Rust's OS name to the tag the generator understands
fn platform_tag() -> &'static str {
    if cfg!(target_os = "macos") { "darwin" } else { "linux" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_tag_is_known() {
        assert!(matches!(platform_tag(), "darwin" | "linux"));
    }

    #[test]
    fn test_detect_with_env() {
        // USER and HOME are set in any reasonable test environment
        unsafe {
            env::set_var("USER", env::var("USER").unwrap_or_else(|_| "tester".to_string()));
            env::set_var("HOSTNAME", "testhost");
        }
        let identity = Identity::detect().unwrap();
        assert!(!identity.user_name.is_empty());
        assert!(!identity.host_name.is_empty());
        assert!(!identity.home.is_empty());
        unsafe {
            env::remove_var("HOSTNAME");
        }
    }
}

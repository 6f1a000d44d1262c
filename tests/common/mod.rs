//! Common test utilities for Camp integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary home directory for integration tests
#[allow(dead_code)]
pub struct TestHome {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the home directory root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestHome {
    /// Create a new test home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a camp.yml in the test home and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.path.join("camp.yml");
        std::fs::write(&path, content).expect("Failed to write camp.yml");
        path
    }

    /// Read a file from the test home
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the test home
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// A camp command with identity pinned to this test home
    pub fn camp(&self) -> Command {
        let mut cmd = Command::cargo_bin("camp").expect("Failed to find camp binary");
        cmd.env("HOME", &self.path)
            .env("USER", "al")
            .env("HOSTNAME", "mbp");
        cmd
    }
}

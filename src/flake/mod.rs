//! Flake declarations and the validate/compile engine
//!
//! A [`Flake`] describes one external flake from camp.yml: where it lives,
//! which of its outputs to pull into the generated flake.nix, and which
//! arguments to pass to those outputs. Declarations are validated once per
//! configuration load ([`validate::validate_flakes`]) and then compiled into
//! generated Nix text fragments ([`compile::compile`]); the collection is
//! treated as immutable for the whole validate-then-compile cycle.

pub mod compile;
pub mod ident;
pub mod validate;
pub mod value;

pub use compile::compile;
pub use validate::validate_flakes;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One external flake to weave into the generated flake.nix
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Flake {
    /// Unique flake name; becomes a Nix input attribute and an outputs
    /// function parameter, so it must be a valid Nix identifier
    pub name: String,

    /// Flake URL (opaque to camp, passed through to the generated input)
    pub url: String,

    /// Input overrides: this flake's transitive input K follows the
    /// top-level input V
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub follows: BTreeMap<String, String>,

    /// Arguments passed to every output of this flake, in addition to the
    /// automatic userName/hostName/home identity arguments
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, serde_yaml::Value>,

    /// Outputs to inject into the generated module lists
    #[serde(default)]
    pub outputs: Vec<FlakeOutput>,
}

/// One named artifact a flake exposes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlakeOutput {
    /// Output name, possibly a dotted attribute path
    /// (e.g. `homeManagerModules.default`)
    pub name: String,

    /// Raw output type tag from camp.yml; see [`OutputType`] for the closed
    /// set. Kept as a string so validation can report the offending value.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Which generated module list an output is injected into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// Machine-wide modules (nix-darwin)
    System,
    /// Per-user modules (home-manager)
    Home,
}

impl OutputType {
    /// Parse an output type tag; anything outside the closed set is `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "system" => Some(OutputType::System),
            "home" => Some(OutputType::Home),
            _ => None,
        }
    }
}

impl Flake {
    /// Create a flake declaration with the given name and URL
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

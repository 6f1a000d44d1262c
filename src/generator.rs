//! Generation of the final flake.nix from compiled fragments
//!
//! The skeletons are fixed, embedded text with `@marker@` placeholders;
//! splicing is plain substitution, not templating. Which skeleton is used
//! depends on the platform: nix-darwin plus home-manager on macOS, a
//! standalone home-manager configuration on Linux.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CampConfig;
use crate::error::{CampError, Result};
use crate::flake::compile;
use crate::flake::value::quote;
use crate::identity::Identity;

const DARWIN_SKELETON: &str = r#"{
  description = "camp environment for @userName@ on @hostName@";

  inputs = {
    nixpkgs.url = "github:NixOS/nixpkgs/nixpkgs-unstable";
    nix-darwin = {
      url = "github:nix-darwin/nix-darwin";
      inputs.nixpkgs.follows = "nixpkgs";
    };
    home-manager = {
      url = "github:nix-community/home-manager";
      inputs.nixpkgs.follows = "nixpkgs";
    };
@flakeInputs@  };

  outputs = inputs@{ self, nixpkgs, nix-darwin, home-manager, @flakeParams@... }:
    let
      userName = "@userName@";
      hostName = "@hostName@";
      home = "@home@";
    in
    {
      darwinConfigurations.${hostName} = nix-darwin.lib.darwinSystem {
        modules = [
          {
            environment.systemPackages = with nixpkgs.legacyPackages.aarch64-darwin; [
@packages@            ];
            environment.variables = {
@envVars@            };
          }
@systemModules@          home-manager.darwinModules.home-manager
          {
            home-manager.useGlobalPkgs = true;
            home-manager.users.${userName} = {
              home.stateVersion = "24.11";
              imports = [
@homeModules@              ];
            };
          }
        ];
      };
    };
}
"#;

const LINUX_SKELETON: &str = r#"{
  description = "camp environment for @userName@ on @hostName@";

  inputs = {
    nixpkgs.url = "github:NixOS/nixpkgs/nixos-unstable";
    home-manager = {
      url = "github:nix-community/home-manager";
      inputs.nixpkgs.follows = "nixpkgs";
    };
@flakeInputs@  };

  outputs = inputs@{ self, nixpkgs, home-manager, @flakeParams@... }:
    let
      userName = "@userName@";
      hostName = "@hostName@";
      home = "@home@";
      pkgs = nixpkgs.legacyPackages.x86_64-linux;
    in
    {
      homeConfigurations.${userName} = home-manager.lib.homeManagerConfiguration {
        inherit pkgs;
        modules = [
          {
            home.username = userName;
            home.homeDirectory = home;
            home.stateVersion = "24.11";
            home.packages = with pkgs; [
@packages@            ];
            home.sessionVariables = {
@envVars@            };
          }
@systemModules@@homeModules@        ];
      };
    };
}
"#;

/// Default destination for the generated flake: `~/.camp/nix/flake.nix`
pub fn default_output_path(home: &str) -> PathBuf {
    PathBuf::from(home).join(".camp").join("nix").join("flake.nix")
}

/// Render the full flake.nix for a validated configuration
///
/// The configuration must already have passed validation; render performs
/// no checks of its own. On Linux there is no machine-wide module list, so
/// both compiled lists land in the home-manager modules list.
pub fn render(config: &CampConfig, identity: &Identity) -> String {
    let fragments = compile(identity, &config.flakes);

    let (skeleton, system_indent, home_indent) = if identity.platform == "darwin" {
        (DARWIN_SKELETON, 10, 16)
    } else {
        (LINUX_SKELETON, 10, 10)
    };

    skeleton
        .replace("@flakeInputs@", &fragments.input_block)
        .replace("@flakeParams@", &fragments.param_list)
        .replace(
            "@systemModules@",
            &module_lines(&fragments.system_modules, system_indent),
        )
        .replace(
            "@homeModules@",
            &module_lines(&fragments.home_modules, home_indent),
        )
        .replace("@packages@", &package_lines(&config.packages, 14))
        .replace("@envVars@", &env_lines(&config.env, 14))
        .replace("@userName@", &identity.user_name)
        .replace("@hostName@", &identity.host_name)
        .replace("@home@", &identity.home)
}

/// Render and write the flake.nix, creating parent directories
pub fn write(config: &CampConfig, identity: &Identity, dest: &Path) -> Result<()> {
    let rendered = render(config, identity);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|err| CampError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: err.to_string(),
        })?;
    }

    fs::write(dest, rendered).map_err(|err| CampError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: err.to_string(),
    })
}

/// Module list elements; parenthesized so the call binds as one element
fn module_lines(entries: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);
    entries
        .iter()
        .map(|entry| format!("{pad}({entry})\n"))
        .collect()
}

fn package_lines(packages: &[String], indent: usize) -> String {
    let pad = " ".repeat(indent);
    packages
        .iter()
        .map(|package| format!("{pad}{package}\n"))
        .collect()
}

fn env_lines(env: &BTreeMap<String, String>, indent: usize) -> String {
    let pad = " ".repeat(indent);
    env.iter()
        .map(|(key, value)| format!("{pad}{key} = {};\n", quote(value)))
        .collect()
}

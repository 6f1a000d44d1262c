//! Structural validation of flake declarations
//!
//! Checks run in a fixed order per flake (declaration order) and stop at the
//! first violation; nothing is repaired silently. Arguments live in a
//! `BTreeMap`, so when a flake has several invalid arguments the one with
//! the lexicographically smallest name is reported.

use std::collections::HashSet;

use serde_yaml::Value;

use crate::error::{CampError, Result};
use crate::flake::ident::is_valid_identifier;
use crate::flake::value::{ArgValue, ShapeError};
use crate::flake::{Flake, OutputType};

/// Argument names camp injects automatically into every module invocation
pub const RESERVED_ARGS: [&str; 3] = ["userName", "hostName", "home"];

/// Validate a collection of flake declarations
///
/// An empty collection is valid. Per flake, in order: non-empty unique
/// identifier name, non-empty URL, non-empty outputs with valid names and
/// types, then arguments via [`check_arg`].
pub fn validate_flakes(flakes: &[Flake]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, flake) in flakes.iter().enumerate() {
        if flake.name.is_empty() {
            return Err(CampError::EmptyFlakeName { index });
        }

        // The second occurrence of a name is the duplicate
        if !seen.insert(flake.name.as_str()) {
            return Err(CampError::DuplicateFlakeName {
                name: flake.name.clone(),
            });
        }

        if !is_valid_identifier(&flake.name) {
            return Err(CampError::InvalidFlakeName {
                name: flake.name.clone(),
            });
        }

        if flake.url.is_empty() {
            return Err(CampError::EmptyFlakeUrl {
                flake: flake.name.clone(),
            });
        }

        if flake.outputs.is_empty() {
            return Err(CampError::NoFlakeOutputs {
                flake: flake.name.clone(),
            });
        }

        for (output_index, output) in flake.outputs.iter().enumerate() {
            if output.name.is_empty() {
                return Err(CampError::EmptyOutputName {
                    flake: flake.name.clone(),
                    index: output_index,
                });
            }

            if OutputType::parse(&output.kind).is_none() {
                return Err(CampError::InvalidOutputType {
                    flake: flake.name.clone(),
                    output: output.name.clone(),
                    kind: output.kind.clone(),
                });
            }
        }

        for (arg_name, value) in &flake.args {
            check_arg(&flake.name, arg_name, value)?;
        }
    }

    Ok(())
}

/// Validate a single flake argument
///
/// Reserved names are rejected before malformed ones; the value must fall
/// inside the supported lattice (scalars and flat lists of scalars).
pub fn check_arg(flake: &str, arg: &str, value: &Value) -> Result<()> {
    if RESERVED_ARGS.contains(&arg) {
        return Err(CampError::ReservedArgName {
            flake: flake.to_string(),
            arg: arg.to_string(),
        });
    }

    if !is_valid_identifier(arg) {
        return Err(CampError::InvalidArgName {
            flake: flake.to_string(),
            arg: arg.to_string(),
        });
    }

    match ArgValue::from_yaml(value) {
        Ok(_) => Ok(()),
        Err(ShapeError::Unsupported) => Err(CampError::UnsupportedArgType {
            flake: flake.to_string(),
            arg: arg.to_string(),
        }),
        Err(ShapeError::UnsupportedElement(index)) => Err(CampError::UnsupportedListElement {
            flake: flake.to_string(),
            arg: arg.to_string(),
            index,
        }),
    }
}

//! Error types and handling for Camp
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Validation errors are terminal and user-visible: the first violation found
//! aborts the load/compile cycle, nothing is retried or auto-repaired.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Camp operations
#[derive(Error, Diagnostic, Debug)]
pub enum CampError {
    // Flake declaration errors
    #[error("Flake at index {index} has an empty name")]
    #[diagnostic(code(camp::flake::empty_name))]
    EmptyFlakeName { index: usize },

    #[error("Duplicate flake name '{name}'")]
    #[diagnostic(
        code(camp::flake::duplicate_name),
        help("Flake names must be unique across camp.yml")
    )]
    DuplicateFlakeName { name: String },

    #[error("Flake '{name}' has an invalid name")]
    #[diagnostic(
        code(camp::flake::invalid_name),
        help("Flake names may contain only letters, numbers, hyphens, and underscores")
    )]
    InvalidFlakeName { name: String },

    #[error("Flake '{flake}' has an empty URL")]
    #[diagnostic(code(camp::flake::empty_url))]
    EmptyFlakeUrl { flake: String },

    #[error("Flake '{flake}' has no outputs defined")]
    #[diagnostic(
        code(camp::flake::no_outputs),
        help("Declare at least one output with a name and a type of 'system' or 'home'")
    )]
    NoFlakeOutputs { flake: String },

    #[error("Flake '{flake}' output at index {index} has an empty name")]
    #[diagnostic(code(camp::flake::empty_output_name))]
    EmptyOutputName { flake: String, index: usize },

    #[error("Flake '{flake}' output '{output}' has invalid type '{kind}'")]
    #[diagnostic(
        code(camp::flake::invalid_output_type),
        help("Output type must be 'system' or 'home'")
    )]
    InvalidOutputType {
        flake: String,
        output: String,
        kind: String,
    },

    // Flake argument errors
    #[error("Flake '{flake}' argument '{arg}' uses a reserved name")]
    #[diagnostic(
        code(camp::flake::reserved_arg_name),
        help("userName, hostName, and home are provided automatically by camp")
    )]
    ReservedArgName { flake: String, arg: String },

    #[error("Flake '{flake}' argument '{arg}' has an invalid name")]
    #[diagnostic(
        code(camp::flake::invalid_arg_name),
        help("Argument names may contain only letters, numbers, hyphens, and underscores")
    )]
    InvalidArgName { flake: String, arg: String },

    #[error("Flake '{flake}' argument '{arg}' has an unsupported type")]
    #[diagnostic(
        code(camp::flake::unsupported_arg_type),
        help("Only string, bool, number, and flat lists of those are supported")
    )]
    UnsupportedArgType { flake: String, arg: String },

    #[error(
        "Flake '{flake}' argument '{arg}' list element at index {index} has an unsupported type"
    )]
    #[diagnostic(
        code(camp::flake::unsupported_list_element),
        help("Lists may only contain strings, bools, and numbers; nesting is not supported")
    )]
    UnsupportedListElement {
        flake: String,
        arg: String,
        index: usize,
    },

    // Package list errors
    #[error("Package at index {index} is empty or contains only whitespace")]
    #[diagnostic(code(camp::package::empty_name))]
    EmptyPackageName { index: usize },

    #[error("Package '{name}' has an invalid name")]
    #[diagnostic(
        code(camp::package::invalid_name),
        help("Package names may contain only letters, numbers, hyphens, underscores, and dots")
    )]
    InvalidPackageName { name: String },

    #[error("Duplicate package '{name}'")]
    #[diagnostic(
        code(camp::package::duplicate),
        help("Package names must be unique across camp.yml")
    )]
    DuplicatePackage { name: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(camp::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(camp::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}")]
    #[diagnostic(code(camp::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // Identity errors
    #[error("Could not determine the current user name")]
    #[diagnostic(
        code(camp::identity::user_name),
        help("Set the USER environment variable")
    )]
    UserNameNotFound,

    #[error("Could not determine the machine host name")]
    #[diagnostic(
        code(camp::identity::host_name),
        help("Set the HOSTNAME environment variable or populate /etc/hostname")
    )]
    HostNameNotFound,

    #[error("Could not determine the home directory")]
    #[diagnostic(code(camp::identity::home_dir))]
    HomeDirNotFound,

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(camp::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(camp::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CampError {
    fn from(err: std::io::Error) -> Self {
        CampError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CampError {
    fn from(err: serde_yaml::Error) -> Self {
        CampError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CampError>;

//! Identifier predicates for names that end up in generated Nix source
//!
//! Pure functions with no error paths; the validator decides which
//! structural error to raise when a predicate fails.

/// Check if a string is a valid Nix identifier
///
/// Valid identifiers are non-empty and contain only letters, numbers,
/// hyphens, and underscores.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Check if a string is a valid Nix package name
///
/// Same charset as [`is_valid_identifier`] plus dots, to allow attribute
/// paths like `python3Packages.requests`.
pub fn is_valid_package_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

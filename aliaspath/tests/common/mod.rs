//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for testing the aliaspath library.

use std::collections::BTreeMap;

use aliaspath::{PathResolver, Result};

/// Root used by most fixtures.
#[allow(dead_code)]
pub const TEST_ROOT: &str = "/srv/app";

/// Creates a resolver at [`TEST_ROOT`] seeded with the built-in aliases.
#[allow(dead_code)]
pub fn default_resolver() -> PathResolver {
    PathResolver::with_defaults(TEST_ROOT).expect("default resolver")
}

/// Creates a resolver from `(name, template)` pairs.
///
/// An empty slice gives the built-in aliases, as with [`PathResolver::new`].
#[allow(dead_code)]
pub fn resolver_with(root: &str, entries: &[(&str, &str)]) -> Result<PathResolver> {
    PathResolver::new(root, table(entries))
}

/// Converts `(name, template)` pairs into an alias table.
#[allow(dead_code)]
pub fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, raw)| ((*name).to_string(), (*raw).to_string()))
        .collect()
}

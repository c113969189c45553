//! Property-based tests for alias resolution.
//!
//! Note: The normalize module already has property tests for
//! canonicalization. This module focuses on resolver behavior.

use super::normalize::{canonicalize, is_absolute};
use super::resolver::PathResolver;
use proptest::prelude::*;
use std::collections::BTreeMap;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_root_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn alias_name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

// A chain of aliases where each one references the previous one.
fn chain_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(path_component_strategy(), 1..10).prop_map(|segments| {
        segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let raw = if i == 0 {
                    segment
                } else {
                    format!("%a{}%/{segment}", i - 1)
                };
                (format!("a{i}"), raw)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // Every default alias resolves to an absolute canonical path
    #[test]
    fn defaults_resolve_absolute_and_canonical(root in absolute_root_strategy()) {
        let resolver = PathResolver::with_defaults(&root).unwrap();
        for name in PathResolver::default_paths().keys() {
            let resolved = resolver.resolve(name).unwrap();
            prop_assert!(is_absolute(&resolved));
            prop_assert_eq!(canonicalize(&resolved), resolved.clone());
            prop_assert!(resolved.starts_with(&root));
        }
    }

    // Resolving everything twice gives the same answer
    #[test]
    fn resolve_all_is_deterministic(root in absolute_root_strategy()) {
        let resolver = PathResolver::with_defaults(&root).unwrap();
        prop_assert_eq!(resolver.resolve_all().unwrap(), resolver.resolve_all().unwrap());
    }

    // Absolute inputs ignore the root
    #[test]
    fn absolute_input_independent_of_root(
        root in absolute_root_strategy(),
        path in absolute_root_strategy(),
    ) {
        let resolver = PathResolver::with_defaults(&root).unwrap();
        prop_assert_eq!(resolver.resolve(&path).unwrap(), canonicalize(&path));
    }

    // Any two-alias cycle fails instead of looping
    #[test]
    fn two_alias_cycle_always_detected(
        a in alias_name_strategy(),
        b in alias_name_strategy(),
        tail in path_component_strategy(),
    ) {
        prop_assume!(a != b && a != "root" && b != "root");
        let mut paths = BTreeMap::new();
        paths.insert(a.clone(), format!("%{b}%/{tail}"));
        paths.insert(b.clone(), format!("%{a}%/{tail}"));
        let resolver = PathResolver::new("/srv/app", paths).unwrap();

        let err = resolver.resolve(&a).unwrap_err();
        prop_assert!(err.is_resolution_error());
    }

    // An acyclic chain resolves to the root followed by every segment
    #[test]
    fn chain_resolves_to_concatenation(chain in chain_strategy()) {
        let paths: BTreeMap<_, _> = chain.iter().cloned().collect();
        let resolver = PathResolver::new("/srv/app", paths).unwrap();

        let last = format!("a{}", chain.len() - 1);
        let resolved = resolver.resolve(&last).unwrap();
        let segments: Vec<_> = chain
            .iter()
            .map(|(_, raw)| raw.rsplit('/').next().unwrap_or_default().to_string())
            .collect();
        prop_assert_eq!(resolved, format!("/srv/app/{}", segments.join("/")));
    }
}

//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::AliasConfig;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use aliaspath::config::{AliasConfig, ConfigMerger};
///
/// let low = AliasConfig { root: Some("/low".to_string()), ..Default::default() };
/// let high = AliasConfig { root: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.root.as_deref(), Some("/high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> AliasConfig {
        let mut result = AliasConfig::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `root`: source overwrites if set
    /// - `paths`: merged per alias, source entries overwrite target entries
    pub fn merge_into(target: &mut AliasConfig, source: &AliasConfig) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        for (name, raw) in &source.paths {
            target.paths.insert(name.clone(), raw.clone());
        }
    }
}

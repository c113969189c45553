//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::{normalize, PathResolver};

/// Alias configuration as stored in `aliaspath.yaml`.
///
/// # Examples
///
/// ```
/// use aliaspath::config::AliasConfig;
///
/// let config: AliasConfig = serde_yaml::from_str(
///     "root: /srv/app\npaths:\n  uploads: \"%site%/uploads\"\n  site: .\n",
/// )
/// .unwrap();
///
/// assert_eq!(config.root.as_deref(), Some("/srv/app"));
/// assert_eq!(config.paths["uploads"], "%site%/uploads");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    /// Root directory relative results are anchored to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Alias definitions. Empty means the built-in defaults.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, String>,
}

impl AliasConfig {
    /// Build a resolver from this configuration.
    ///
    /// `fallback_root` is used when the configuration has no `root`. A
    /// relative root, from either place, is anchored at `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolver rejects the root or an alias
    /// definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::config::AliasConfig;
    /// use std::path::Path;
    ///
    /// let config = AliasConfig {
    ///     root: Some("app".to_string()),
    ///     ..Default::default()
    /// };
    /// let resolver = config.build_resolver(Path::new("/srv"), "/unused").unwrap();
    /// assert_eq!(resolver.resolve("web").unwrap(), "/srv/app/public");
    /// ```
    pub fn build_resolver(&self, base_dir: &Path, fallback_root: &str) -> Result<PathResolver> {
        let root = self.root.as_deref().unwrap_or(fallback_root);
        let base = base_dir.to_str().ok_or_else(|| Error::InvalidPath {
            path: base_dir.to_path_buf(),
            reason: "Path contains invalid UTF-8".to_string(),
        })?;

        let anchored = normalize::make_absolute(root, base);
        PathResolver::new(&anchored, self.paths.clone())
    }
}

//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading aliaspath configuration files
//! with proper precedence.

use crate::config::schema::AliasConfig;
use crate::error::{Error, Result};
use crate::path::normalize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const CONFIG_FILE: &str = "aliaspath.yaml";

/// Private (uncommitted) project configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "aliaspath.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: AliasConfig,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use aliaspath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::discover(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover project configurations by walking up from `start_dir`.
    ///
    /// Stops at the first directory containing `aliaspath.yaml` or
    /// `aliaspath.local.yaml`. The result is sorted by precedence, lowest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
                let candidate = current.join(name);
                if candidate.exists() {
                    configs.push(Self::load_source(&candidate, precedence)?);
                }
            }

            // Stop if we found configs or can't go up anymore
            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        configs.sort_by_key(|s| s.precedence);
        Ok(configs)
    }

    /// Load one file as a configuration source.
    ///
    /// A relative `root` in the file is anchored at the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_source(path: &Path, precedence: u8) -> Result<ConfigSource> {
        let mut config = Self::load_file(path)?;

        if let Some(root) = config.root.take() {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let dir = dir.to_str().ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path contains invalid UTF-8".to_string(),
            })?;
            let anchored = if normalize::is_absolute(&normalize::expand_tilde(&root)) {
                root
            } else {
                normalize::canonicalize(&normalize::join(dir, &root))
            };
            config.root = Some(anchored);
        }

        log::debug!("loaded configuration from {}", path.display());
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<AliasConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

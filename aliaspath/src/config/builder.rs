//! Configuration builder combining files, environment and overrides.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::AliasConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::path::PathResolver;
use std::env;
use std::path::{Path, PathBuf};

/// Builds an [`AliasConfig`] from every configured source.
///
/// # Examples
///
/// ```
/// use aliaspath::config::{AliasConfig, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(AliasConfig {
///         root: Some("/srv/app".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.root.as_deref(), Some("/srv/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<AliasConfig>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that discovers files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover configuration files from this directory instead of the
    /// current one. Also the fallback root.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering project files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: AliasConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ALIASPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge and validate every source.
    ///
    /// Precedence, highest first: overrides, environment, local project
    /// file, project file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(&self) -> Result<AliasConfig> {
        let mut config = if self.skip_files {
            AliasConfig::default()
        } else if let Some(ref file) = self.config_file {
            ConfigLoader::load_source(file, 1)?.config
        } else {
            ConfigMerger::merge(ConfigLoader::discover(&self.working_dir()?)?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build the configuration and construct a resolver from it.
    ///
    /// Without a configured root the working directory is used, and a
    /// relative root is anchored there.
    ///
    /// # Errors
    ///
    /// Returns an error if building the configuration or the resolver fails.
    pub fn build_resolver(&self) -> Result<PathResolver> {
        let config = self.build()?;
        let working_dir = self.working_dir()?;
        let fallback = working_dir.to_str().ok_or_else(|| Error::InvalidPath {
            path: working_dir.clone(),
            reason: "Path contains invalid UTF-8".to_string(),
        })?;
        config.build_resolver(&working_dir, fallback)
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match self.working_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_skip_everything() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, AliasConfig::default());
    }

    #[test]
    fn test_build_from_discovered_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("aliaspath.yaml"),
            "root: /srv/app\npaths:\n  web: public\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("aliaspath.local.yaml"),
            "paths:\n  files: \"%web%/files\"\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.root.as_deref(), Some("/srv/app"));
        assert_eq!(config.paths.len(), 2);
    }

    #[test]
    fn test_build_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("custom.yaml");
        fs::write(&file, "root: /opt/site\n").unwrap();

        let resolver = ConfigBuilder::new()
            .with_config_file(&file)
            .skip_env()
            .build_resolver()
            .unwrap();

        assert_eq!(resolver.resolve("web").unwrap(), "/opt/site/public");
    }

    #[test]
    fn test_overrides_win() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("aliaspath.yaml"), "root: /from/file\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .with_config(AliasConfig {
                root: Some("/from/override".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.root.as_deref(), Some("/from/override"));
    }

    #[test]
    fn test_invalid_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("aliaspath.yaml"),
            "paths:\n  a: \"%a%/x\"\n",
        )
        .unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_resolver_falls_back_to_working_dir() {
        let resolver = ConfigBuilder::new()
            .with_working_dir(Path::new("/srv/fallback"))
            .skip_files()
            .skip_env()
            .build_resolver()
            .unwrap();
        assert_eq!(resolver.root(), "/srv/fallback");
    }
}

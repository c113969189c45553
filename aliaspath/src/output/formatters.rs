//! Output formatter implementations.

use std::collections::BTreeMap;

use crate::{Error, Result};

use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Converts an alias name to an environment variable name.
///
/// - Prepends the prefix
/// - Converts to uppercase
/// - Replaces hyphens and dots with underscores
/// - Validates the result
fn alias_to_env_var(prefix: &str, alias: &str) -> Result<String> {
    let var_name = format!("{prefix}{alias}")
        .to_uppercase()
        .replace(['-', '.'], "_");

    if !is_valid_env_var_name(&var_name) {
        return Err(Error::Validation {
            field: "environment_variable".to_string(),
            message: format!(
                "invalid environment variable name '{var_name}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
            ),
        });
    }

    Ok(var_name)
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
    prefix: String,
}

impl ExportFormatter {
    /// Create a new export formatter.
    ///
    /// # Arguments
    ///
    /// * `shell` - The shell type to format exports for
    /// * `prefix` - Prepended to every variable name
    #[must_use]
    pub fn new(shell: ShellType, prefix: &str) -> Self {
        Self {
            shell,
            prefix: prefix.to_string(),
        }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String> {
        let exports = paths
            .iter()
            .map(|(alias, path)| {
                let var_name = alias_to_env_var(&self.prefix, alias)?;
                Ok(self.shell.format_export(&var_name, path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(exports.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String> {
        serde_json::to_string_pretty(paths).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String> {
        let yaml = serde_yaml::to_string(paths).map_err(|e| Error::Validation {
            field: "yaml_output".to_string(),
            message: format!("failed to serialize to YAML: {e}"),
        })?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter {
    prefix: String,
}

impl DotenvFormatter {
    /// Create a new dotenv formatter.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl OutputFormatter for DotenvFormatter {
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String> {
        let lines = paths
            .iter()
            .map(|(alias, path)| {
                let var_name = alias_to_env_var(&self.prefix, alias)?;
                if path.contains(char::is_whitespace) || path.contains('#') {
                    Ok(format!("{var_name}=\"{}\"", path.replace('"', "\\\"")))
                } else {
                    Ok(format!("{var_name}={path}"))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, paths: &BTreeMap<String, String>) -> Result<String> {
        if paths.is_empty() {
            return Ok("No aliases defined.".to_string());
        }

        let width = paths.keys().map(String::len).max().unwrap_or(0);
        let lines: Vec<_> = paths
            .iter()
            .map(|(alias, path)| format!("{alias:<width$}  {path}"))
            .collect();

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_paths() -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("web".to_string(), "/srv/app/public".to_string());
        map.insert("bolt_assets".to_string(), "/srv/app/public/bolt-public".to_string());
        map
    }

    #[test]
    fn test_is_valid_env_var_name() {
        assert!(is_valid_env_var_name("WEB"));
        assert!(is_valid_env_var_name("_PRIVATE"));
        assert!(is_valid_env_var_name("EXTENSIONS_CONFIG"));

        assert!(!is_valid_env_var_name(""));
        assert!(!is_valid_env_var_name("1WEB"));
        assert!(!is_valid_env_var_name("WEB-DIR"));
        assert!(!is_valid_env_var_name("WEB DIR"));
    }

    #[test]
    fn test_alias_to_env_var() {
        assert_eq!(alias_to_env_var("", "web").unwrap(), "WEB");
        assert_eq!(alias_to_env_var("app_", "bolt-assets").unwrap(), "APP_BOLT_ASSETS");
        assert_eq!(alias_to_env_var("", "v2.cache").unwrap(), "V2_CACHE");
        assert!(alias_to_env_var("", "1cache").is_err());
    }

    #[test]
    fn test_export_formatter_bash() {
        let formatter = ExportFormatter::new(ShellType::Bash, "");
        let output = formatter.format(&create_test_paths()).unwrap();
        assert_eq!(
            output,
            "export BOLT_ASSETS=/srv/app/public/bolt-public\nexport WEB=/srv/app/public"
        );
    }

    #[test]
    fn test_export_formatter_invalid_name() {
        let mut paths = create_test_paths();
        paths.insert("9lives".to_string(), "/x".to_string());
        let formatter = ExportFormatter::new(ShellType::Bash, "");
        assert!(formatter.format(&paths).is_err());
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_paths()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, create_test_paths());
    }

    #[test]
    fn test_yaml_formatter() {
        let output = YamlFormatter.format(&create_test_paths()).unwrap();
        assert!(output.contains("web: /srv/app/public"));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_dotenv_formatter() {
        let mut paths = create_test_paths();
        paths.insert("spaced".to_string(), "/srv/my app".to_string());
        let output = DotenvFormatter::new("SITE_").format(&paths).unwrap();
        assert!(output.contains("SITE_WEB=/srv/app/public"));
        assert!(output.contains("SITE_SPACED=\"/srv/my app\""));
    }

    #[test]
    fn test_human_formatter_aligns() {
        let output = HumanFormatter.format(&create_test_paths()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "bolt_assets  /srv/app/public/bolt-public");
        assert_eq!(lines[1], "web          /srv/app/public");
    }

    #[test]
    fn test_human_formatter_empty() {
        let output = HumanFormatter.format(&BTreeMap::new()).unwrap();
        assert_eq!(output, "No aliases defined.");
    }
}

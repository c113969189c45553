//! Shell detection and export formatting.

use std::env;

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(shell_path) if shell_path.contains("zsh") => Self::Zsh,
            Ok(shell_path) if shell_path.contains("fish") => Self::Fish,
            Ok(shell_path) if shell_path.contains("pwsh") || shell_path.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Parse a shell type from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Shell name (case-insensitive): "bash", "zsh", "fish", "powershell", "pwsh"
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Quote a value for this shell if it needs quoting.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.quote("/srv/app"), "/srv/app");
    /// assert_eq!(ShellType::Bash.quote("/srv/my app"), "'/srv/my app'");
    /// assert_eq!(ShellType::Bash.quote("/srv/it's"), "'/srv/it'\\''s'");
    /// ```
    #[must_use]
    pub fn quote(&self, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh | Self::Fish if !needs_quoting(value) => value.to_string(),
            Self::Bash | Self::Zsh => format!("'{}'", value.replace('\'', "'\\''")),
            Self::Fish => format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")),
            Self::PowerShell => {
                let escaped = value
                    .replace('`', "``")
                    .replace('"', "`\"")
                    .replace('$', "`$");
                format!("\"{escaped}\"")
            }
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// # Arguments
    ///
    /// * `var` - Environment variable name
    /// * `value` - Value to assign (will be quoted appropriately)
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("WEB", "/srv/app/public"), "export WEB=/srv/app/public");
    /// assert_eq!(ShellType::Fish.format_export("WEB", "/srv/app/public"), "set -x WEB /srv/app/public");
    /// assert_eq!(ShellType::PowerShell.format_export("WEB", "C:/app"), "$env:WEB=\"C:/app\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        let quoted = self.quote(value);
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={quoted}"),
            Self::Fish => format!("set -x {var} {quoted}"),
            Self::PowerShell => format!("$env:{var}={quoted}"),
        }
    }
}

/// Whether a value contains characters a POSIX-like shell would interpret.
fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | ':' | '+' | ',' | '@' | '%'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(ShellType::from_string("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("BASH").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("sh").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("zsh").unwrap(), ShellType::Zsh);
        assert_eq!(ShellType::from_string("fish").unwrap(), ShellType::Fish);
        assert_eq!(
            ShellType::from_string("pwsh").unwrap(),
            ShellType::PowerShell
        );

        // Unknown shell should error
        assert!(ShellType::from_string("unknown").is_err());
    }

    #[test]
    fn test_format_export_bash() {
        let shell = ShellType::Bash;
        assert_eq!(
            shell.format_export("FILES", "/srv/app/public/files"),
            "export FILES=/srv/app/public/files"
        );
        assert_eq!(
            shell.format_export("FILES", "/srv/my files"),
            "export FILES='/srv/my files'"
        );
    }

    #[test]
    fn test_format_export_fish() {
        let shell = ShellType::Fish;
        assert_eq!(shell.format_export("WEB", "/srv/web"), "set -x WEB /srv/web");
        assert_eq!(
            shell.format_export("WEB", "/srv/it's"),
            "set -x WEB '/srv/it\\'s'"
        );
    }

    #[test]
    fn test_format_export_powershell() {
        let shell = ShellType::PowerShell;
        assert_eq!(
            shell.format_export("WEB", "C:/srv/$web"),
            "$env:WEB=\"C:/srv/`$web\""
        );
    }

    #[test]
    fn test_quote_empty() {
        assert_eq!(ShellType::Zsh.quote(""), "''");
    }

    #[test]
    fn test_detect_returns_a_shell() {
        // Depends on the test environment, so only check it does not panic
        let detected = ShellType::detect();
        assert!(matches!(
            detected,
            ShellType::Bash | ShellType::Zsh | ShellType::Fish | ShellType::PowerShell
        ));
    }
}

//! Error types for the aliaspath library.
//!
//! This module provides the error hierarchy for alias definition, resolution
//! and configuration loading, using `thiserror` for ergonomic error handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an aliaspath error.
///
/// # Examples
///
/// ```
/// use aliaspath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/srv/app".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the aliaspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The resolver root is not absolute after canonicalization.
    #[error("invalid root '{root}': {reason}")]
    InvalidRoot {
        /// The root as supplied by the caller.
        root: String,
        /// The reason the root was rejected.
        reason: String,
    },

    /// A template references its own alias name.
    #[error("alias '{name}' cannot reference itself (template '{template}')")]
    SelfReference {
        /// The alias being defined.
        name: String,
        /// The offending template.
        template: String,
    },

    /// A template references an alias that is not defined.
    #[error("failed to resolve '{path}': alias %{alias}% is not defined")]
    UndefinedAlias {
        /// The missing alias.
        alias: String,
        /// The template being resolved when the reference was found.
        path: String,
    },

    /// An alias chain leads back to an alias already being resolved.
    #[error("failed to resolve '{path}': infinite recursion detected at alias %{alias}%")]
    RecursionDetected {
        /// The alias that was reached a second time.
        alias: String,
        /// The template being resolved when the cycle was found.
        path: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid root, configuration file or configuration value.
    Configuration,
    /// An alias definition was rejected.
    Definition,
    /// A template could not be resolved.
    Resolution,
    /// Reading configuration from disk failed.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Definition => write!(f, "definition"),
            Self::Resolution => write!(f, "resolution"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::{Error, ErrorKind};
    ///
    /// let err = Error::UndefinedAlias {
    ///     alias: "web".to_string(),
    ///     path: "%web%/files".to_string(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::Resolution);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRoot { .. } | Self::InvalidPath { .. } | Self::Validation { .. } => {
                ErrorKind::Configuration
            }
            Self::SelfReference { .. } => ErrorKind::Definition,
            Self::UndefinedAlias { .. } | Self::RecursionDetected { .. } => ErrorKind::Resolution,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Check if error was raised while resolving a template.
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        self.kind() == ErrorKind::Resolution
    }

    /// Check if error was raised while defining an alias.
    #[must_use]
    pub fn is_definition_error(&self) -> bool {
        self.kind() == ErrorKind::Definition
    }

    /// The alias name this error is about, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::SelfReference { name, .. } => Some(name),
            Self::UndefinedAlias { alias, .. } | Self::RecursionDetected { alias, .. } => {
                Some(alias)
            }
            _ => None,
        }
    }
}

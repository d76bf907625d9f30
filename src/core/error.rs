//! Unified error handling for the preprocessing library
//!
//! This module provides a centralized error type covering every failure the
//! filters, analyzers, and the extract/reinsert round trip can surface.

use std::fmt;

/// Main error type for the preprocessing library
#[derive(Debug)]
pub enum PreprocessError {
    /// An external analyzer failed to initialize or respond
    ToolUnavailable {
        /// Analyzer name (e.g. "ner-tagger", "segmenter")
        tool: String,
        /// Error message
        message: String,
    },

    /// Malformed input text or a malformed entity record
    Input {
        /// Error message
        message: String,
    },

    /// Configuration-related errors
    Config {
        /// Error message
        message: String,
    },

    /// I/O errors from file operations
    Io(std::io::Error),

    /// JSON serialization/deserialization errors
    SerdeJson(serde_json::Error),

    /// TOML configuration parsing errors
    Toml(toml::de::Error),
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessError::ToolUnavailable { tool, message } => {
                write!(
                    f,
                    "Analyzer `{tool}` unavailable: {message}. \
                     Solution: construct the analyzer set once at startup and check that its resources are reachable"
                )
            },
            PreprocessError::Input { message } => {
                write!(
                    f,
                    "Input error: {message}. \
                     Solution: check the text content and the entity record shape"
                )
            },
            PreprocessError::Config { message } => {
                write!(
                    f,
                    "Configuration error: {message}. \
                     Solution: check the config file or start from Config::default()"
                )
            },
            PreprocessError::Io(err) => {
                write!(
                    f,
                    "I/O error: {err}. \
                     Solution: check file permissions and that paths exist"
                )
            },
            PreprocessError::SerdeJson(err) => {
                write!(
                    f,
                    "JSON error: {err}. \
                     Solution: verify the serialized data structure"
                )
            },
            PreprocessError::Toml(err) => {
                write!(
                    f,
                    "TOML parsing error: {err}. \
                     Solution: verify the config file format"
                )
            },
        }
    }
}

impl std::error::Error for PreprocessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreprocessError::Io(err) => Some(err),
            PreprocessError::SerdeJson(err) => Some(err),
            PreprocessError::Toml(err) => Some(err),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for PreprocessError {
    fn from(err: std::io::Error) -> Self {
        PreprocessError::Io(err)
    }
}

impl From<serde_json::Error> for PreprocessError {
    fn from(err: serde_json::Error) -> Self {
        PreprocessError::SerdeJson(err)
    }
}

impl From<toml::de::Error> for PreprocessError {
    fn from(err: toml::de::Error) -> Self {
        PreprocessError::Toml(err)
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Error severity levels for logging and monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning - something unexpected but recoverable by the caller
    Warning,
    /// Error - operation failed but the process can continue
    Error,
    /// Critical - the library cannot operate with this setup
    Critical,
}

impl PreprocessError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PreprocessError::ToolUnavailable { .. } => ErrorSeverity::Error,
            PreprocessError::Input { .. } => ErrorSeverity::Warning,
            PreprocessError::Config { .. } => ErrorSeverity::Critical,
            PreprocessError::Io(_) => ErrorSeverity::Error,
            PreprocessError::SerdeJson(_) => ErrorSeverity::Error,
            PreprocessError::Toml(_) => ErrorSeverity::Critical,
        }
    }

    /// Get error category for metrics/monitoring
    pub fn category(&self) -> &'static str {
        match self {
            PreprocessError::ToolUnavailable { .. } => "tool",
            PreprocessError::Input { .. } => "input",
            PreprocessError::Config { .. } => "config",
            PreprocessError::Io(_) => "io",
            PreprocessError::SerdeJson(_) | PreprocessError::Toml(_) => "serialization",
        }
    }
}

/// Trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context(self, context: &str) -> Result<T>;

    /// Add context using a closure
    fn with_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PreprocessError>,
{
    fn with_context(self, context: &str) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            match base_error {
                PreprocessError::ToolUnavailable { tool, message } => {
                    PreprocessError::ToolUnavailable {
                        tool,
                        message: format!("{context}: {message}"),
                    }
                },
                PreprocessError::Input { message } => PreprocessError::Input {
                    message: format!("{context}: {message}"),
                },
                PreprocessError::Config { message } => PreprocessError::Config {
                    message: format!("{context}: {message}"),
                },
                other => other, // For errors that don't have a message field
            }
        })
    }

    fn with_context_lazy<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => {
                let context = f();
                Err(e).with_context(&context)
            },
        }
    }
}

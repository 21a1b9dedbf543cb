//! Error handling types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for recode
#[derive(Error, Debug)]
pub enum Error {
    /// A rule with an empty find pattern
    #[error("Configuration error: rule #{index} has an empty pattern")]
    EmptyPattern {
        /// Zero-based position of the rule in its table
        index: usize,
    },

    /// A rule set without any file extension to match
    #[error("Configuration error: no file extensions configured")]
    NoExtensions,

    /// A preset name that is not built in
    #[error("Configuration error: unknown preset '{name}'")]
    UnknownPreset {
        /// The requested preset name
        name: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Root of the tree to migrate does not exist or is not a directory
    #[error("Root directory not found: {}", path.display())]
    RootNotFound {
        /// The missing root
        path: PathBuf,
    },

    /// A file or directory could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory the operation failed on
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised before any file is touched
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyPattern { .. }
                | Self::NoExtensions
                | Self::UnknownPreset { .. }
                | Self::Configuration { .. }
                | Self::RootNotFound { .. }
        )
    }

    /// The file or directory this error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } | Self::RootNotFound { path } => Some(path.as_path()),
            _ => None,
        }
    }
}

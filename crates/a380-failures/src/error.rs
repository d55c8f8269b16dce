//! Error types for a380-failures.
//!
//! Registry construction errors are programmer errors in the failure tables
//! and are fatal. Lookup errors are caller errors and are recoverable.

use std::path::PathBuf;
use thiserror::Error;

use crate::definition::FailureIdentifier;

/// The main error type for a380-failures operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Construction Errors ===
    /// Two named entries share the same numeric identifier.
    #[error("duplicate failure identifier {identifier}: claimed by '{first}' and '{second}'")]
    DuplicateIdentifier {
        /// The shared identifier.
        identifier: FailureIdentifier,
        /// Name of the entry declared first.
        first: &'static str,
        /// Name of the entry that collided with it.
        second: &'static str,
    },

    /// Two named entries share the same symbolic name.
    #[error("duplicate failure name '{name}'")]
    DuplicateName {
        /// The repeated name.
        name: &'static str,
    },

    /// A definition references an identifier with no named entry.
    #[error("failure definition '{label}' references unknown identifier {identifier}")]
    UnknownReference {
        /// The dangling identifier.
        identifier: FailureIdentifier,
        /// Label of the offending definition.
        label: &'static str,
    },

    // === Lookup Errors ===
    /// No named entry has the requested symbolic name.
    #[error("no failure named '{name}'")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// No named entry carries the requested identifier.
    #[error("no failure with identifier {0}")]
    UnknownIdentifier(FailureIdentifier),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path that couldn't be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for a380-failures operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for a symbolic name.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Check if this error is a failed lookup by name.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error means the failure tables themselves are broken.
    ///
    /// Such errors can only be fixed by correcting the data; the registry
    /// cannot be built while they stand.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIdentifier { .. }
                | Self::DuplicateName { .. }
                | Self::UnknownReference { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("DoesNotExist");
        assert_eq!(err.to_string(), "no failure named 'DoesNotExist'");

        let err = Error::UnknownIdentifier(FailureIdentifier::new(99_999));
        assert_eq!(err.to_string(), "no failure with identifier 99999");
    }

    #[test]
    fn test_duplicate_identifier_display() {
        let err = Error::DuplicateIdentifier {
            identifier: FailureIdentifier::new(22_000),
            first: "FmcA",
            second: "FmcB",
        };
        let msg = err.to_string();
        assert!(msg.contains("22000"));
        assert!(msg.contains("FmcA"));
        assert!(msg.contains("FmcB"));
    }

    #[test]
    fn test_unknown_reference_display() {
        let err = Error::UnknownReference {
            identifier: FailureIdentifier::new(12_345),
            label: "Ghost",
        };
        let msg = err.to_string();
        assert!(msg.contains("12345"));
        assert!(msg.contains("Ghost"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::UnknownIdentifier(FailureIdentifier::new(1)).is_not_found());
    }

    #[test]
    fn test_is_fatal() {
        assert!(Error::DuplicateName { name: "FmcA" }.is_fatal());
        assert!(Error::UnknownReference {
            identifier: FailureIdentifier::new(1),
            label: "x",
        }
        .is_fatal());
        assert!(!Error::not_found("x").is_fatal());
        assert!(!Error::UnknownIdentifier(FailureIdentifier::new(1)).is_fatal());
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "duplicate chapter 22".to_string(),
        };
        assert!(err.to_string().contains("duplicate chapter 22"));
    }

    #[test]
    fn test_file_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::FileRead {
            path: PathBuf::from("/root/forbidden.toml"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden.toml"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}

//! Fixture error types

use std::fmt;
use std::io;

use crate::validator::ValidationError;

/// Error building or saving a fixture
#[derive(Debug)]
pub enum FixtureError {
    /// The fixture definition failed validation; nothing was built or written
    InvalidConfiguration(Vec<ValidationError>),
    /// IO error (permission denied, disk full, parent is not a directory, etc.)
    Io(io::Error),
    /// JSON serialization or parse error
    Serialize(serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::InvalidConfiguration(errors) => {
                write!(f, "Invalid configuration:")?;
                for error in errors {
                    write!(f, " {};", error)?;
                }
                Ok(())
            }
            FixtureError::Io(e) => write!(f, "IO error: {}", e),
            FixtureError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::InvalidConfiguration(_) => None,
            FixtureError::Io(e) => Some(e),
            FixtureError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for FixtureError {
    fn from(e: io::Error) -> Self {
        FixtureError::Io(e)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(e: serde_json::Error) -> Self {
        FixtureError::Serialize(e)
    }
}

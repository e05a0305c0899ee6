use crate::ValidationIssue;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        issues: Vec<ValidationIssue>,
        location: ErrorLocation,
    },

    #[error("User record has no identifier {location}")]
    MissingIdentifier { location: ErrorLocation },

    #[error("Overlay serialization error for {slot}: {source} {location}")]
    Serialization {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error from the collected field issues
    #[track_caller]
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        let message = issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ");

        CoreError::Validation {
            message,
            issues,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_identifier() -> Self {
        CoreError::MissingIdentifier {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(slot: &'static str, source: serde_json::Error) -> Self {
        CoreError::Serialization {
            slot,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

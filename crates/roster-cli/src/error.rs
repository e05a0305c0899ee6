use crate::ClientError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] roster_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("{0}")]
    Core(#[from] roster_core::CoreError),

    #[error("User {id} not found {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Page size {page_size} is not one of {allowed:?} {location}")]
    InvalidPageSize {
        page_size: usize,
        allowed: Vec<usize>,
        location: ErrorLocation,
    },

    #[error("Output serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl AppError {
    #[track_caller]
    pub fn not_found(id: impl ToString) -> Self {
        AppError::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_page_size(page_size: usize, allowed: &[usize]) -> Self {
        AppError::InvalidPageSize {
            page_size,
            allowed: allowed.to_vec(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

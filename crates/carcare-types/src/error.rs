//! Error types for carcare

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Store IO error: {0}")]
    IoError(String),
}

/// Rejected input at the record-creation boundary
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Brand must not be empty")]
    EmptyBrand,

    #[error("Model must not be empty")]
    EmptyModel,

    #[error("Year {0} is out of range")]
    YearOutOfRange(i32),

    #[error("Odometer {given} km is below the car's current reading of {current} km")]
    OdometerBelowCurrent { given: u32, current: u32 },

    #[error("Cost must be a non-negative number, got {0}")]
    InvalidCost(f64),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Service record not found: {0}")]
    ServiceNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error, 403 Forbidden

    #[error("Manual document not found at {0}")]
    DocNotFound(String),

    #[error("Failed to read manual: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Locator strings arrive from the CLI and must name a positive MAJOR.MINOR pair.
#[derive(Error, Debug)]
#[error("Invalid unit locator '{0}': expected MAJOR.MINOR with positive integers")]
pub struct UnitIdParseError(pub String);

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Loading the manual failed: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Unit {0} not found in the manual")]
    UnitNotFound(String),

    #[error("Data processing failed: {0}")]
    Processing(String),
}

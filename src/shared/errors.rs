//! Error types for the converter backend.
//!
//! All errors are serializable for IPC communication with the frontend.
//! Engine failures (`ConvertError`) carry the offending units as typed
//! fields; the session level wraps them into `ConverterError` alongside
//! request validation and settings I/O failures.

use serde::Serialize;
use thiserror::Error;

use crate::core::engine::{Unit, UnitCategory};

/// Conversion engine errors
///
/// Both variants indicate a caller or table-authoring bug, never an
/// environmental failure. They are fatal to the single conversion
/// attempt, not to the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum ConvertError {
    /// A requested unit does not belong to the stated category
    #[error("Unit {unit} does not belong to category {category}")]
    UnsupportedUnit { category: UnitCategory, unit: Unit },

    /// A non-identity pair has no entry in the conversion table
    #[error("No conversion defined from {from} to {to} in {category}")]
    UnsupportedPair {
        category: UnitCategory,
        from: Unit,
        to: Unit,
    },
}

/// Session-level errors surfaced to the frontend
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConverterError {
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConvertError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConverterError {
    fn from(err: std::io::Error) -> Self {
        ConverterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConverterError {
    fn from(err: serde_json::Error) -> Self {
        ConverterError::Validation(format!("Serialization error: {}", err))
    }
}

impl From<ParseUnitError> for ConverterError {
    fn from(err: ParseUnitError) -> Self {
        ConverterError::Validation(err.to_string())
    }
}

impl From<ParseCategoryError> for ConverterError {
    fn from(err: ParseCategoryError) -> Self {
        ConverterError::Validation(err.to_string())
    }
}

/// A unit string that matched neither a canonical name nor a symbol
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Unknown unit: {0}")]
pub struct ParseUnitError(pub String);

/// A category string that matched no known category
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

pub type ConvertResult<T> = Result<T, ConvertError>;
pub type ConverterResult<T> = Result<T, ConverterError>;

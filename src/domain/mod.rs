/// Domain module containing the habit log's data types
/// 
/// This module defines the persisted entities (HabitRecord, Document) and
/// their validation rules. Everything that ends up in the JSON file is
/// declared here.

pub mod record;
pub mod document;
pub mod types;

// Re-export public types for easy access
pub use record::*;
pub use document::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
    
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

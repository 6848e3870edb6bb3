/// MCP tools for habit logging
///
/// This module contains the tools that external clients (like Claude) can
/// call, and the boundary that turns raw tool arguments into typed requests.

pub mod add;
pub mod get;

// Re-export tool functions for easy access
pub use add::*;
pub use get::*;

use std::collections::HashMap;
use serde_json::Value;
use thiserror::Error;
use crate::domain::{DomainError, HabitRecord};
use crate::storage::{HabitStorage, StorageError};

/// Name of the tool that logs a habit
pub const ADD_HABIT: &str = "add_habit";
/// Name of the tool that lists logged habits
pub const GET_HABITS: &str = "get_habits";

/// Errors a tool call can fail with
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Tool not found: {0}")]
    UnknownTool(String),
}

/// A validated tool call
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    AddHabit(AddHabitParams),
    GetHabits(GetHabitsParams),
}

impl OperationRequest {
    /// Validate raw tool arguments
    ///
    /// Nothing here touches storage, so a rejected call leaves the document
    /// as it was.
    pub fn parse(tool: &str, args: &HashMap<String, Value>) -> Result<Self, ToolError> {
        match tool {
            ADD_HABIT => {
                let name = required_str(args, "name")?;
                let amount = required_number(args, "amount")?;
                let unit = required_str(args, "unit")?;

                HabitRecord::validate_name(&name)?;
                HabitRecord::validate_amount(amount)?;
                HabitRecord::validate_unit(&unit)?;

                Ok(OperationRequest::AddHabit(AddHabitParams { name, amount, unit }))
            }
            GET_HABITS => {
                let limit = match args.get("limit") {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(positive_integer(value, "limit")?),
                };
                Ok(OperationRequest::GetHabits(GetHabitsParams { limit }))
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    /// Run the request against the store and return the text for the caller
    pub fn execute<S: HabitStorage>(self, storage: &mut S) -> Result<String, ToolError> {
        match self {
            OperationRequest::AddHabit(params) => Ok(add_habit(storage, params)?.message),
            OperationRequest::GetHabits(params) => Ok(get_habits(storage, params)?.message),
        }
    }
}

fn required_str(args: &HashMap<String, Value>, field: &'static str) -> Result<String, DomainError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(DomainError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DomainError::InvalidValue {
            message: format!("{} must be a string, got {}", field, other),
        }),
    }
}

fn required_number(args: &HashMap<String, Value>, field: &'static str) -> Result<f64, DomainError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(DomainError::MissingField(field)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| DomainError::InvalidValue {
            message: format!("{} is out of range", field),
        }),
        Some(other) => Err(DomainError::InvalidValue {
            message: format!("{} must be a number, got {}", field, other),
        }),
    }
}

fn positive_integer(value: &Value, field: &'static str) -> Result<u32, DomainError> {
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0 && *n >= 1.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .ok_or_else(|| DomainError::Validation {
            message: format!("{} must be a positive integer, got {}", field, value),
        })
}

/// Tool for reading back logged habits
/// 
/// This module implements the get_habits MCP tool.

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::domain::DomainError;
use crate::storage::HabitStorage;
use crate::tools::ToolError;

/// Text returned when the log is empty
pub const NO_HABITS_MESSAGE: &str = "No habits recorded yet.";

/// Parameters for reading habits
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct GetHabitsParams {
    /// Number of records to retrieve
    #[serde(default)]
    #[schemars(schema_with = "limit_schema")]
    pub limit: Option<u32>,
}

/// Advertised as a plain number of at least 1; fractional values are
/// rejected when the call is parsed.
fn limit_schema(_: &mut SchemaGenerator) -> Schema {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::Number.into()),
        ..Default::default()
    };
    schema.number().minimum = Some(1.0);
    schema.into()
}

/// Response from reading habits
#[derive(Debug, Serialize)]
pub struct GetHabitsResponse {
    pub message: String,
    pub total_records: usize,
    pub returned_records: usize,
}

/// Render the stored records as pretty JSON
/// 
/// With a limit only the most recent records are returned, oldest first.
pub fn get_habits<S: HabitStorage>(
    storage: &mut S,
    params: GetHabitsParams,
) -> Result<GetHabitsResponse, ToolError> {
    if params.limit == Some(0) {
        return Err(DomainError::Validation {
            message: "limit must be a positive integer, got 0".to_string(),
        }.into());
    }
    
    let document = storage.load()?;
    let records = document.recent_habits(params.limit.map(|n| n as usize));
    
    let message = if records.is_empty() {
        NO_HABITS_MESSAGE.to_string()
    } else {
        serde_json::to_string_pretty(records).map_err(crate::storage::StorageError::from)?
    };
    
    tracing::debug!("Returning {} of {} habit records", records.len(), document.habits.len());
    
    Ok(GetHabitsResponse {
        message,
        total_records: document.habits.len(),
        returned_records: records.len(),
    })
}

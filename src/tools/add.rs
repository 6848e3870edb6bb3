/// Tool for logging a habit
/// 
/// This module implements the add_habit MCP tool.

use chrono::{SubsecRound, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::domain::HabitRecord;
use crate::storage::HabitStorage;
use crate::tools::ToolError;

/// Parameters for logging a habit
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct AddHabitParams {
    /// Name of the activity (e.g., Drinking Water)
    pub name: String,
    /// Amount
    pub amount: f64,
    /// Unit (e.g., Liters)
    pub unit: String,
}

/// Response from logging a habit
#[derive(Debug, Serialize)]
pub struct AddHabitResponse {
    pub success: bool,
    pub message: String,
    pub record: HabitRecord,
}

/// Append a new record and write the document back
/// 
/// The document is reloaded first so edits made to the file since the last
/// call are kept.
pub fn add_habit<S: HabitStorage>(
    storage: &mut S,
    params: AddHabitParams,
) -> Result<AddHabitResponse, ToolError> {
    storage.load()?;
    
    // The file only keeps millisecond precision
    let now = Utc::now().trunc_subsecs(3);
    let record = HabitRecord::new(
        storage.next_record_id(now),
        params.name,
        params.amount,
        params.unit,
        now,
    )?;
    
    storage.append(record.clone());
    storage.flush()?;
    
    tracing::info!("Logged habit {} ({})", record.summary(), record.id);
    
    Ok(AddHabitResponse {
        success: true,
        message: format!("Successfully saved: {}", record.summary()),
        record,
    })
}

/// The persisted document
///
/// Everything the server stores lives in one JSON object. It is always
/// written back in full.

use serde::{Deserialize, Serialize};
use crate::domain::{HabitRecord, UserProfile};

/// Root of the JSON file
///
/// `habits` is kept in insertion order, which is also chronological order.
/// Missing keys fall back to their defaults when reading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub habits: Vec<HabitRecord>,
    #[serde(default, rename = "userProfile")]
    pub user_profile: UserProfile,
}

impl Document {
    /// The most recent `limit` records in chronological order, or all of
    /// them when no limit is given
    pub fn recent_habits(&self, limit: Option<usize>) -> &[HabitRecord] {
        match limit {
            Some(n) if n < self.habits.len() => &self.habits[self.habits.len() - n..],
            _ => &self.habits,
        }
    }
}

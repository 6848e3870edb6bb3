/// Small value types shared by the domain entities
/// 
/// Record identifiers and the (otherwise unused) user profile live here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a habit record
/// 
/// This is the creation time in milliseconds since the Unix epoch. It is
/// stored as a bare integer in the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Milliseconds since the epoch this id was minted at
    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile of the person whose habits are being logged
/// 
/// Carried through the document untouched; no tool reads or writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
        }
    }
}

/// Storage layer for persisting habit data
/// 
/// This module handles reading and writing the JSON document. It provides
/// a small interface for loading the document, appending records and
/// flushing the whole document back to disk.

pub mod json;

// Re-export the main storage types
pub use json::*;

use std::path::PathBuf;
use chrono::{DateTime, Utc};
use thiserror::Error;
use crate::domain::{Document, HabitRecord, RecordId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    #[error("Data file {path} is not a valid habit document: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait defining the storage interface for the habit document
/// 
/// The document is held in memory between `load` and `flush`; `append`
/// only touches the in-memory copy.
pub trait HabitStorage {
    /// Re-read the document from the backing store, creating it if absent
    fn load(&mut self) -> Result<&Document, StorageError>;
    
    /// The document as last loaded or modified
    fn document(&self) -> &Document;
    
    /// Append a record to the in-memory document
    fn append(&mut self, record: HabitRecord);
    
    /// Write the entire in-memory document to the backing store
    fn flush(&self) -> Result<(), StorageError>;
    
    /// Recorded habits in chronological order
    fn habits(&self) -> &[HabitRecord] {
        &self.document().habits
    }
    
    /// Id for a record created at `now`
    /// 
    /// Ids are creation timestamps in milliseconds, bumped past the last
    /// stored id so two records created within the same millisecond still
    /// get distinct, increasing ids.
    fn next_record_id(&self, now: DateTime<Utc>) -> RecordId {
        let now_ms = now.timestamp_millis();
        match self.habits().last() {
            Some(last) if last.id.0 >= now_ms => RecordId(last.id.0 + 1),
            _ => RecordId(now_ms),
        }
    }
}

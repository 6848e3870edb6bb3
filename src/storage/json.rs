/// JSON file implementation of the habit storage interface
/// 
/// The whole document lives in one pretty-printed JSON file which is
/// rewritten in full on every flush.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{Document, HabitRecord};
use crate::storage::{StorageError, HabitStorage};

/// File-backed storage implementation
/// 
/// Owns the path of the data file and the document loaded from it.
pub struct JsonStore {
    path: PathBuf,
    document: Document,
}

impl JsonStore {
    /// Store for the data file at `path` holding the default document
    /// 
    /// Nothing is read or written until `load` or `flush`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            document: Document::default(),
        }
    }
    
    /// Open the data file at `path`, creating it with the default
    /// document if it does not exist yet
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let mut store = Self::new(path);
        store.load()?;
        
        tracing::info!("JSON storage initialized at: {:?}", store.path);
        
        Ok(store)
    }
    
    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
    
    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
    
    /// Sibling file the document is staged in before being renamed over
    /// the real one
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
    
    fn create_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }
}

impl HabitStorage for JsonStore {
    fn load(&mut self) -> Result<&Document, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.document = serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                    path: self.path.clone(),
                    source,
                })?;
                tracing::debug!("Loaded {} habit records from {:?}", self.document.habits.len(), self.path);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No data file at {:?}, writing default document", self.path);
                self.document = Document::default();
                self.create_parent_dir()?;
                self.flush()?;
            }
            Err(e) => return Err(self.io_error(e)),
        }
        
        Ok(&self.document)
    }
    
    fn document(&self) -> &Document {
        &self.document
    }
    
    fn append(&mut self, record: HabitRecord) {
        tracing::debug!("Appending habit record {} ({})", record.id, record.name);
        self.document.habits.push(record);
    }
    
    fn flush(&self) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(&self.document)?;
        let staging = self.staging_path();
        
        fs::write(&staging, text).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(self.io_error(e));
        }
        
        tracing::debug!("Flushed {} habit records to {:?}", self.document.habits.len(), self.path);
        Ok(())
    }
}

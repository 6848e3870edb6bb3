/// Public library interface for the Habit Log MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use std::collections::HashMap;
use std::path::PathBuf;
use serde_json::Value;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

// Internal modules
mod domain;
mod storage;
mod tools;
mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{JsonStore, StorageError, HabitStorage};
pub use tools::{
    add_habit, get_habits, AddHabitParams, AddHabitResponse, GetHabitsParams, GetHabitsResponse,
    OperationRequest, ToolError, ADD_HABIT, GET_HABITS, NO_HABITS_MESSAGE,
};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main habit log server that implements the MCP protocol
///
/// This server owns the JSON store and routes the `add_habit` and
/// `get_habits` tools to it.
pub struct HabitTrackerServer {
    storage: JsonStore,
}

impl HabitTrackerServer {
    /// Create a new habit log server backed by the JSON file at `data_path`
    ///
    /// The file is created with an empty document if it doesn't exist yet.
    /// A file that cannot be loaded is only logged here; every tool call
    /// reloads it and reports the failure to the client.
    pub fn new(data_path: PathBuf) -> Self {
        tracing::info!("Initializing Habit Tracker server with data file: {:?}", data_path);

        let mut storage = JsonStore::new(data_path);
        if let Err(e) = storage.load() {
            tracing::warn!("Could not load habit data at startup: {}", e);
        }

        Self { storage }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin is closed or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        let reader = BufReader::new(tokio::io::stdin());
        self.serve(reader, tokio::io::stdout()).await
    }

    /// Run the MCP server over an arbitrary reader/writer pair
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!(
            "Server started successfully, found {} existing habit records",
            self.storage.habits().len()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.serve(reader, writer).await
    }

    /// Validate and execute one tool call, returning the text for the client
    ///
    /// The document is reloaded from disk as part of every call.
    pub fn call_tool(
        &mut self,
        name: &str,
        arguments: &HashMap<String, Value>,
    ) -> Result<String, ToolError> {
        let request = OperationRequest::parse(name, arguments)?;
        tracing::debug!("Executing {:?}", request);
        request.execute(&mut self.storage)
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &JsonStore {
        &self.storage
    }
}

/// Main entry point for the Habit Log MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_log_mcp::HabitTrackerServer;

/// File name of the habit document inside the data directory
const DATA_FILE_NAME: &str = "data.json";

/// Get the default data file path with robust fallback strategy
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        // Current working directory (last resort)
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Only accept directories we can actually write to
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join(DATA_FILE_NAME));
            }
        }
    }

    let temp_path = std::env::temp_dir().join("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for data file: {}", temp_path.display());
    Ok(temp_path.join(DATA_FILE_NAME))
}

/// Command line arguments for the Habit Log MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_log_mcp={}", log_level))
        .with_writer(std::io::stderr) // stdout carries the protocol
        .init();

    let data_path = match args.data_file {
        Some(path) => path,
        None => get_default_data_path()?,
    };

    info!("Using data file at: {}", data_path.display());

    // Parent directories are created by the store
    let server = HabitTrackerServer::new(data_path);

    info!("Habit Tracker MCP Server is running!");
    server.run().await?;

    info!("Habit Tracker MCP server shutdown complete");
    Ok(())
}

/// MCP protocol implementation
/// 
/// Newline-delimited JSON-RPC over stdio: message types in `protocol`,
/// the request loop and tool routing in `server`.

pub mod protocol;
pub mod server;

pub use server::McpServer;

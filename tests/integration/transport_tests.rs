/// Tests of the newline-delimited JSON-RPC transport
use habit_log_mcp::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::BufReader;

fn request(id: u64, method: &str, params: Value) -> String {
    json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}).to_string()
}

fn parse_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).expect("each response is one JSON line"))
        .collect()
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_full_session() {
        let dir = TempDir::new().unwrap();
        let server = HabitTrackerServer::new(dir.path().join("data.json"));

        let input = [
            request(1, "initialize", json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "0"}
            })),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
            request(2, "tools/list", json!({})),
            request(3, "tools/call", json!({"name": "get_habits", "arguments": {}})),
            request(4, "tools/call", json!({"name": "add_habit", "arguments": {"name": "Water", "amount": 2, "unit": "Liters"}})),
            request(5, "tools/call", json!({"name": "get_habits", "arguments": {"limit": 1}})),
            request(6, "tools/call", json!({"name": "remove_habit", "arguments": {}})),
        ]
        .join("\n")
            + "\n";

        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let responses = parse_lines(&output);
        // The notification gets no answer
        assert_eq!(responses.len(), 6);

        assert_eq!(responses[0]["id"], 1);
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "Habit Tracker");

        let tools: Vec<&str> = responses[1]["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(tools, vec!["add_habit", "get_habits"]);
        assert!(responses[1]["result"]["tools"][0]["inputSchema"].is_object());

        assert_eq!(responses[2]["result"]["content"][0]["text"], "No habits recorded yet.");
        assert_eq!(responses[3]["result"]["content"][0]["text"], "Successfully saved: 2 Liters Water");

        let listed: Vec<Value> =
            serde_json::from_str(responses[4]["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["unit"], "Liters");

        assert_eq!(responses[5]["id"], 6);
        assert_eq!(responses[5]["error"]["code"], -32601);
        assert_eq!(responses[5]["error"]["message"], "Tool not found: remove_habit");
    }

    #[tokio::test]
    async fn test_ping_and_notification_over_mock_io() {
        let dir = TempDir::new().unwrap();
        let server = HabitTrackerServer::new(dir.path().join("data.json"));

        let mock = tokio_test::io::Builder::new()
            .read(b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n")
            .read(b"{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n")
            .write(b"{\"jsonrpc\":\"2.0\",\"id\":7,\"result\":{}}\n")
            .build();
        let (reader, writer) = tokio::io::split(mock);

        server.serve(BufReader::new(reader), writer).await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_lines_do_not_stop_the_server() {
        let dir = TempDir::new().unwrap();
        let server = HabitTrackerServer::new(dir.path().join("data.json"));

        let input = format!("this is not json\n\n{}\n", request(9, "ping", json!({})));
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let responses = parse_lines(&output);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], Value::Null);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 9);
        assert_eq!(responses[1]["result"], json!({}));
    }

    #[tokio::test]
    async fn test_validation_failure_is_invalid_params() {
        let dir = TempDir::new().unwrap();
        let server = HabitTrackerServer::new(dir.path().join("data.json"));

        let input = request(1, "tools/call", json!({"name": "add_habit", "arguments": {"name": "Water", "unit": "Liters"}})) + "\n";
        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).await.unwrap();

        let responses = parse_lines(&output);
        assert_eq!(responses[0]["error"]["code"], -32602);
        assert_eq!(responses[0]["error"]["message"], "Missing required field: amount");
    }
}

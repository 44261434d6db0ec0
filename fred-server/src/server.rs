//! Newline-delimited JSON protocol over a reader/writer pair.
//!
//! Each input line is one request object; each produces exactly one output line.
//! Blank lines are skipped. An `id` on the request is echoed back unchanged.

use fred::Fred;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
enum Request {
    ListTools,
    CallTool {
        name: String,
        #[serde(default)]
        arguments: Value,
    },
}

fn with_id(mut response: Value, id: Option<Value>) -> Value {
    if let (Some(id), Some(obj)) = (id, response.as_object_mut()) {
        obj.insert("id".to_string(), id);
    }
    response
}

/// Answer one protocol line. Returns `None` for blank input.
pub async fn handle_line(fred: &Fred, line: &str) -> Option<Value> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut raw: Map<String, Value> = match serde_json::from_str(line) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(target: "fred::server", error = %e, "unparseable request line");
            return Some(json!({ "error": format!("invalid request: {e}") }));
        }
    };
    let id = raw.remove("id");

    let response = match serde_json::from_value::<Request>(Value::Object(raw)) {
        Ok(Request::ListTools) => json!({ "tools": fred::descriptors() }),
        Ok(Request::CallTool { name, arguments }) => {
            tracing::debug!(target: "fred::server", tool = %name, "call_tool");
            json!({ "result": fred.call_tool(&name, &arguments).await })
        }
        Err(e) => {
            tracing::warn!(target: "fred::server", error = %e, "unsupported request");
            json!({ "error": format!("invalid request: {e}") })
        }
    };
    Some(with_id(response, id))
}

/// Serve requests until `reader` reaches end of input.
///
/// # Errors
/// Returns I/O errors from reading or writing; protocol errors are answered inline.
pub async fn serve<R, W>(fred: &Fred, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let response = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(fred, line).await,
            Err(e) => {
                tracing::warn!(target: "fred::server", error = %e, "request line is not UTF-8");
                Some(json!({ "error": format!("invalid request: {e}") }))
            }
        };
        let Some(response) = response else {
            continue;
        };
        let mut frame = response.to_string();
        frame.push('\n');
        writer.write_all(frame.as_bytes()).await?;
        writer.flush().await?;
    }
    tracing::info!(target: "fred::server", "input closed, shutting down");
    Ok(())
}

//! Geometry server - newline-delimited JSON-RPC front end for the library
//!
//! Lets a UI process in another language call the geometry and collision
//! functions over stdin/stdout.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Loaded circles, spatial index, and collision rules
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod protocol;
pub mod state;

pub use protocol::{ErrorCode, Outcome, Request, Response, RpcError};
pub use state::ServerState;

use anyhow::Context;
use handlers::*;
use std::io::{BufRead, Write};

/// Route a request to its handler
pub fn handle_request(state: &mut ServerState, request: Request) -> Response {
    let Request { id, method, params } = request;
    log::debug!("Handling {}", method);

    match method.as_str() {
        "DistanceBetweenPoints" => handle_distance_between_points(id, params),
        "AngleBetweenPoints" => handle_angle_between_points(id, params),
        "AngleBetweenLines" => handle_angle_between_lines(id, params),
        "DistanceBetweenLines" => handle_distance_between_lines(id, params),
        "CircleCollision" => handle_circle_collision(id, params),
        "MakeCircle" => handle_make_circle(id, params),
        "MakeLine" => handle_make_line(id, params),
        "MakeX" => handle_make_x(id, params),
        "MakeSquare" => handle_make_square(id, params),
        "LoadCircles" => handle_load_circles(state, id, params),
        "ClearCircles" => handle_clear_circles(state, id),
        "QueryCirclesAtPoint" => handle_query_circles_at_point(state, id, params),
        "SetCollisionRules" => handle_set_collision_rules(state, id, params),
        "FindCollisions" => handle_find_collisions(state, id, params),
        _ => {
            log::warn!("Unknown method: {}", method);
            Response::err(id, ErrorCode::MethodNotFound, format!("Unknown method: {}", method))
        }
    }
}

/// Handle one raw protocol line. Blank lines produce no response.
pub fn handle_line(state: &mut ServerState, line: &str) -> Option<Response> {
    if line.trim().is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Failed to parse request: {}", e);
            return Some(Response::err(None, ErrorCode::ParseError, e.to_string()));
        }
    };

    // Keep the id around so a malformed request can still be answered
    let id = value.get("id").cloned();
    match serde_json::from_value::<Request>(value) {
        Ok(request) => Some(handle_request(state, request)),
        Err(e) => {
            log::warn!("Invalid request: {}", e);
            Some(Response::err(id, ErrorCode::InvalidRequest, e.to_string()))
        }
    }
}

/// Answer every line of `reader` on `writer` until end of input.
///
/// A line that is not valid UTF-8 gets a parse error with a null id; only
/// I/O failures end the loop early.
pub fn serve<R: BufRead, W: Write>(
    state: &mut ServerState,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read request line")?;
        if read == 0 {
            return Ok(());
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(state, line),
            Err(e) => {
                log::warn!("Request line is not UTF-8: {}", e);
                Some(Response::err(
                    None,
                    ErrorCode::ParseError,
                    format!("request is not valid UTF-8: {}", e),
                ))
            }
        };

        if let Some(response) = response {
            let json = serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{}", json).context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }
}

//! Constructor handlers: MakeCircle, MakeLine, MakeX, MakeSquare
//!
//! Each one echoes the built value back so clients share one wire shape.

use crate::geometry::{make_circle, make_line, make_square, make_x, Line, Point};
use crate::server::protocol::{ErrorCode, Response};
use serde::Deserialize;

use super::parse_params;

#[derive(Deserialize)]
struct MakeCircleParams {
    center: Point,
    radius: f64,
}

#[derive(Deserialize)]
struct MakeLineParams {
    point1: Point,
    point2: Point,
}

#[derive(Deserialize)]
struct MakeXParams {
    line1: Line,
    line2: Line,
    center: Point,
}

#[derive(Deserialize)]
struct MakeSquareParams {
    center: Point,
    width: f64,
    height: f64,
}

pub fn handle_make_circle(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    match parse_params::<MakeCircleParams>(params) {
        Ok(p) => Response::ok_serialized(id, &make_circle(p.center, p.radius)),
        Err(e) => Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    }
}

pub fn handle_make_line(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    match parse_params::<MakeLineParams>(params) {
        Ok(p) => Response::ok_serialized(id, &make_line(p.point1, p.point2)),
        Err(e) => Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    }
}

pub fn handle_make_x(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    match parse_params::<MakeXParams>(params) {
        Ok(p) => Response::ok_serialized(id, &make_x(p.line1, p.line2, p.center)),
        Err(e) => Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    }
}

pub fn handle_make_square(id: Option<serde_json::Value>, params: Option<serde_json::Value>) -> Response {
    match parse_params::<MakeSquareParams>(params) {
        Ok(p) => Response::ok_serialized(id, &make_square(p.center, p.width, p.height)),
        Err(e) => Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    }
}

//! Measurement handlers: distances, angles, and pairwise circle collision

use crate::geometry::{
    angle_between_lines, angle_between_points, circle_collision, distance_between_points,
    segment_distance, signed_angle_between_lines, Circle, Line, Point,
};
use crate::server::protocol::{ErrorCode, Response};
use serde::Deserialize;

use super::parse_params;

#[derive(Deserialize)]
struct PointPairParams {
    first: Point,
    second: Point,
}

#[derive(Deserialize)]
struct LinePairParams {
    line1: Line,
    line2: Line,
    #[serde(default)]
    signed: bool,
}

#[derive(Deserialize)]
struct CirclePairParams {
    circle1: Circle,
    circle2: Circle,
}

fn invalid_params(id: Option<serde_json::Value>, err: anyhow::Error) -> Response {
    Response::err(id, ErrorCode::InvalidParams, format!("{:#}", err))
}

/// Handle DistanceBetweenPoints request
pub fn handle_distance_between_points(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    match parse_params::<PointPairParams>(params) {
        Ok(p) => Response::ok(id, serde_json::json!({
            "distance": distance_between_points(p.first, p.second)
        })),
        Err(e) => invalid_params(id, e),
    }
}

/// Handle AngleBetweenPoints request
pub fn handle_angle_between_points(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    match parse_params::<PointPairParams>(params) {
        Ok(p) => Response::ok(id, serde_json::json!({
            "angle": angle_between_points(p.first, p.second)
        })),
        Err(e) => invalid_params(id, e),
    }
}

/// Handle AngleBetweenLines request - unsigned unless `signed` is set
pub fn handle_angle_between_lines(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    match parse_params::<LinePairParams>(params) {
        Ok(p) => {
            let angle = if p.signed {
                signed_angle_between_lines(p.line1, p.line2)
            } else {
                angle_between_lines(p.line1, p.line2)
            };
            Response::ok(id, serde_json::json!({ "angle": angle }))
        }
        Err(e) => invalid_params(id, e),
    }
}

/// Handle DistanceBetweenLines request
pub fn handle_distance_between_lines(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    match parse_params::<LinePairParams>(params) {
        Ok(p) => {
            let (distance, closest) = segment_distance(p.line1, p.line2);
            Response::ok(id, serde_json::json!({
                "distance": distance,
                "closest": closest
            }))
        }
        Err(e) => invalid_params(id, e),
    }
}

/// Handle CircleCollision request
pub fn handle_circle_collision(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    match parse_params::<CirclePairParams>(params) {
        Ok(p) => Response::ok(id, serde_json::json!({
            "colliding": circle_collision(p.circle1, p.circle2)
        })),
        Err(e) => invalid_params(id, e),
    }
}

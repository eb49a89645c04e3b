//! Circle set handlers: LoadCircles, ClearCircles, QueryCirclesAtPoint,
//! SetCollisionRules, FindCollisions

use crate::collision::{
    circles_at_point, run_full_collision_check, run_targeted_collision_check, CollisionRules,
};
use crate::geometry::{Circle, Point};
use crate::server::protocol::{ErrorCode, Response};
use crate::server::state::ServerState;
use serde::Deserialize;
use std::time::Instant;

use super::parse_params;

#[derive(Deserialize)]
struct CircleEntry {
    id: u64,
    center: Point,
    radius: f64,
}

#[derive(Deserialize)]
struct LoadCirclesParams {
    circles: Vec<CircleEntry>,
}

#[derive(Deserialize)]
struct QueryPointParams {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct FindCollisionsParams {
    #[serde(default)]
    ids: Option<Vec<u64>>,
}

/// Handle LoadCircles request - adds or replaces circles by id
pub fn handle_load_circles(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: LoadCirclesParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    };

    let incoming = params.circles.len();
    state.load_circles(
        params
            .circles
            .into_iter()
            .map(|c| (c.id, Circle::new(c.center, c.radius))),
    );
    log::debug!("Loaded {} circles ({} total)", incoming, state.circles.len());

    Response::ok(id, serde_json::json!({ "count": state.circles.len() }))
}

/// Handle ClearCircles request
pub fn handle_clear_circles(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    state.clear();
    Response::ok(id, serde_json::json!({ "status": "ok" }))
}

/// Handle QueryCirclesAtPoint request - ids of circles containing the point
pub fn handle_query_circles_at_point(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: QueryPointParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    };

    let index = match &state.spatial_index {
        Some(index) if state.has_circles() => index,
        _ => {
            return Response::err(
                id,
                ErrorCode::NoCirclesLoaded,
                "No circles loaded. Call LoadCircles first.",
            );
        }
    };

    let ids = circles_at_point(index, Point::new(params.x, params.y));
    Response::ok(id, serde_json::json!({ "ids": ids }))
}

/// Handle SetCollisionRules request
pub fn handle_set_collision_rules(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let rules: CollisionRules = match parse_params(params) {
        Ok(r) => r,
        Err(e) => return Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    };

    if !rules.is_valid() {
        log::warn!("Rejected collision rules with clearance {}", rules.clearance);
        return Response::err(
            id,
            ErrorCode::InvalidRules,
            "clearance must be a finite, non-negative number",
        );
    }

    state.rules = rules;
    Response::ok(id, serde_json::json!({ "clearance": state.rules.clearance }))
}

/// Handle FindCollisions request - full check, or targeted when `ids` is given
pub fn handle_find_collisions(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let params: FindCollisionsParams = match parse_params(params) {
        Ok(p) => p,
        Err(e) => return Response::err(id, ErrorCode::InvalidParams, format!("{:#}", e)),
    };

    let index = match &state.spatial_index {
        Some(index) if state.has_circles() => index,
        _ => {
            return Response::err(
                id,
                ErrorCode::NoCirclesLoaded,
                "No circles loaded. Call LoadCircles first.",
            );
        }
    };

    let start = Instant::now();
    let pairs = match params.ids {
        Some(ids) => run_targeted_collision_check(index, &ids, &state.rules),
        None => run_full_collision_check(index, &state.rules),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    Response::ok(id, serde_json::json!({
        "pairs": pairs,
        "elapsed_ms": elapsed_ms
    }))
}

//! Lane-Change Routes

use axum::{extract::State, Json};

use crate::controller::MidSnapshot;
use crate::lane_ticker;
use crate::SharedState;

/// Request a lane change; the ticker expires it after the configured window
pub async fn post_lane_change(State(state): State<SharedState>) -> Json<MidSnapshot> {
    Json(lane_ticker::request_lane_change(&state).await)
}

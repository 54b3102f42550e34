//! Sensor and Toggle Routes

use axum::{
    extract::{Path, State},
    Json,
};
use data_validator::SensorUpdate;

use crate::controller::{MidSnapshot, Toggle};
use crate::{ApiError, SharedState};

/// Apply a partial sensor update (slider moves)
pub async fn post_sensors(
    State(state): State<SharedState>,
    Json(update): Json<SensorUpdate>,
) -> Result<Json<MidSnapshot>, ApiError> {
    let mut state = state.write().await;
    let snapshot = state.controller.apply_sensors(&update)?;
    Ok(Json(snapshot))
}

/// Flip a boolean input (button clicks)
pub async fn post_toggle(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<MidSnapshot>, ApiError> {
    let toggle: Toggle = name.parse()?;
    let mut state = state.write().await;
    Ok(Json(state.controller.toggle(toggle)))
}

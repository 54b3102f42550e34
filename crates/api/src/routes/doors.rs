//! Door Routes

use adas::{Door, DoorOutcome};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::controller::MidSnapshot;
use crate::{ApiError, SharedState};

/// Response for a door button press
#[derive(Debug, Serialize)]
pub struct DoorResponse {
    pub door: Door,
    pub outcome: DoorOutcome,
    pub mid: MidSnapshot,
}

/// Press the button of door `index` (0=FL, 1=FR, 2=RL, 3=RR)
pub async fn post_door_toggle(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Json<DoorResponse>, ApiError> {
    let door = Door::from_index(index)?;
    let mut state = state.write().await;
    let (toggle, mid) = state.controller.toggle_door(door);
    Ok(Json(DoorResponse {
        door,
        outcome: toggle.outcome,
        mid,
    }))
}

//! MID Routes

use axum::{extract::State, Json};

use crate::controller::MidSnapshot;
use crate::SharedState;

/// Current MID contents; read-only, never requests a beep
pub async fn get_mid(State(state): State<SharedState>) -> Json<MidSnapshot> {
    let state = state.read().await;
    Json(state.controller.snapshot())
}

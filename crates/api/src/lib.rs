//! ADAS Simulator API Server
//!
//! HTTP control surface standing in for the simulator's sliders and buttons.
//! Every input runs one update cycle and answers with the resulting MID
//! snapshot; beeps play asynchronously through the audio dispatcher.

use adas::Clock;
use alerting::{AudioDispatcher, ToneSink};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod controller;
pub mod error;
pub mod lane_ticker;
mod routes;
pub mod settings;

pub use controller::{Controller, MidSnapshot, Toggle};
pub use error::ApiError;
pub use settings::Settings;

/// Application state shared across handlers
pub struct AppState {
    /// Vehicle state and core decision state
    pub controller: Controller,
    /// Whether a lane-change ticker task is alive
    pub lane_ticker_running: bool,
    /// Lane-change tick period
    pub lane_tick: Duration,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

pub type SharedState = Arc<RwLock<AppState>>;

impl AppState {
    /// Create new application state; must be called inside a tokio runtime
    pub fn new(
        settings: &Settings,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn ToneSink>,
    ) -> Result<Self, ApiError> {
        let audio = AudioDispatcher::new(sink)?;
        Ok(Self {
            controller: Controller::new(settings, clock, audio)?,
            lane_ticker_running: false,
            lane_tick: settings.lane_tick(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        })
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/mid", get(routes::mid::get_mid))
        .route("/api/v1/sensors", post(routes::inputs::post_sensors))
        .route("/api/v1/toggles/:toggle", post(routes::inputs::post_toggle))
        .route("/api/v1/doors/:door/toggle", post(routes::doors::post_door_toggle))
        .route("/api/v1/lane-change", post(routes::lane::post_lane_change))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Initialize logging; a second call leaves the first subscriber in place.
/// Returns whether this call installed the subscriber.
pub fn init_logging(level: &str) -> bool {
    let parsed = level.parse::<Level>().ok();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parsed.unwrap_or(Level::INFO))
        .with_target(true)
        .finish();

    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    if !installed {
        tracing::debug!("Tracing subscriber already installed");
    }
    if parsed.is_none() {
        warn!("Unknown log level {:?}, using info", level);
    }
    installed
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), ApiError> {
    let state = AppState::new(
        &settings,
        Arc::new(adas::MonotonicClock::new()),
        Arc::new(alerting::LogSink),
    )?;
    let app = create_router(Arc::new(RwLock::new(state)));

    info!("Starting API server on {}", settings.server.addr);

    let listener = tokio::net::TcpListener::bind(&settings.server.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logging_init_is_tolerated() {
        init_logging("not-a-level");
        assert!(!init_logging("debug"));
    }
}

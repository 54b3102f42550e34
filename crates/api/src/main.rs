//! ADAS Level-1 Simulator - Main Entry Point

use api::{init_logging, run_server, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    init_logging(&settings.log_level);

    info!("=== ADAS Level-1 Simulator v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "FCW cap {} m, beep debounce {} ms, lane tick {} ms",
        settings.adas.fcw.max_threshold_m, settings.beep.debounce_ms, settings.lane_tick_ms
    );

    run_server(settings).await?;

    Ok(())
}

//! Recurring lane-change tick

use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::SharedState;

/// Request a lane change and make sure exactly one ticker drives its expiry
pub async fn request_lane_change(shared: &SharedState) -> crate::controller::MidSnapshot {
    let mut app = shared.write().await;
    let snapshot = app.controller.request_lane_change();
    if !app.lane_ticker_running {
        app.lane_ticker_running = true;
        spawn_lane_ticker(shared.clone(), app.lane_tick);
    }
    snapshot
}

/// Tick the lane-change validator every `period` until it reports inactive.
///
/// The running flag is cleared under the same lock as the final tick, so a
/// concurrent request either sees the ticker still running or starts a new one.
pub fn spawn_lane_ticker(shared: SharedState, period: Duration) {
    tokio::spawn(async move {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticks.tick().await;

        loop {
            ticks.tick().await;
            let mut app = shared.write().await;
            if !app.controller.tick_lane_change() {
                app.lane_ticker_running = false;
                debug!("Lane ticker stopped");
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::AppState;
    use adas::{ManualClock, Timestamp};
    use alerting::LogSink;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tokio::time::sleep;

    fn shared(clock: Arc<ManualClock>) -> SharedState {
        let state = AppState::new(&Settings::default(), clock, Arc::new(LogSink)).unwrap();
        Arc::new(RwLock::new(state))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_expires_request_and_stops() {
        let clock = Arc::new(ManualClock::new(Timestamp::from_millis(0)));
        let shared = shared(clock.clone());

        let snap = request_lane_change(&shared).await;
        assert!(snap.lane_change_active);
        assert!(shared.read().await.lane_ticker_running);

        // Ticks before the window closes keep the request alive
        sleep(Duration::from_millis(450)).await;
        assert!(shared.read().await.controller.vehicle().lane_change_requested);

        clock.advance(Duration::from_millis(1_000));
        sleep(Duration::from_millis(250)).await;

        let app = shared.read().await;
        assert!(!app.lane_ticker_running);
        assert!(!app.controller.vehicle().lane_change_requested);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rerequest_reuses_running_ticker() {
        let clock = Arc::new(ManualClock::new(Timestamp::from_millis(0)));
        let shared = shared(clock.clone());

        request_lane_change(&shared).await;
        clock.advance(Duration::from_millis(800));
        request_lane_change(&shared).await;
        assert!(shared.read().await.lane_ticker_running);

        // Original window would have closed at 1000 ms; the new one runs to 1800 ms
        clock.advance(Duration::from_millis(400));
        sleep(Duration::from_millis(250)).await;
        assert!(shared.read().await.controller.vehicle().lane_change_requested);

        clock.advance(Duration::from_millis(600));
        sleep(Duration::from_millis(250)).await;
        assert!(!shared.read().await.lane_ticker_running);
    }
}

//! Lane-change request validation

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::clock::Timestamp;

/// Default lifetime of a lane-change request
pub const LANE_CHANGE_WINDOW: Duration = Duration::from_millis(1000);

/// Time-bounded lane-change request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneChangeState {
    pub active: bool,
    pub expires_at: Timestamp,
}

impl LaneChangeState {
    /// A request made at `now`, live for `window`
    pub fn requested(now: Timestamp, window: Duration) -> Self {
        Self {
            active: true,
            expires_at: now.after(window),
        }
    }

    /// Expire the request once `now` reaches `expires_at`
    pub fn tick(self, now: Timestamp) -> Self {
        if self.active && now >= self.expires_at {
            Self {
                active: false,
                ..self
            }
        } else {
            self
        }
    }
}

/// Start a lane-change request with the default one-second window
pub fn request_lane_change(now: Timestamp) -> LaneChangeState {
    LaneChangeState::requested(now, LANE_CHANGE_WINDOW)
}

/// Holds the current request and its configured window.
///
/// The host calls [`tick`](Self::tick) on a short interval while a request
/// is active and may stop once it returns `false`.
#[derive(Debug, Clone)]
pub struct LaneChangeValidator {
    state: LaneChangeState,
    window: Duration,
}

impl LaneChangeValidator {
    pub fn new(window: Duration) -> Self {
        Self {
            state: LaneChangeState::default(),
            window,
        }
    }

    /// Register a request; re-requesting restarts the window
    pub fn request(&mut self, now: Timestamp) -> LaneChangeState {
        self.state = LaneChangeState::requested(now, self.window);
        debug!("Lane change requested, expires at {} ms", self.state.expires_at.as_millis());
        self.state
    }

    /// Advance expiry; returns whether the request is still active
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let was_active = self.state.active;
        self.state = self.state.tick(now);
        if was_active && !self.state.active {
            debug!("Lane change request expired");
        }
        self.state.active
    }

    pub fn state(&self) -> LaneChangeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }
}

impl Default for LaneChangeValidator {
    fn default() -> Self {
        Self::new(LANE_CHANGE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_request_expires_after_window() {
        let t0 = 5_000;
        let state = request_lane_change(at(t0));
        assert!(state.active);
        assert_eq!(state.expires_at, at(t0 + 1_000));

        assert!(state.tick(at(t0 + 999)).active);
        assert!(!state.tick(at(t0 + 1_001)).active);
    }

    #[test]
    fn test_expires_exactly_at_deadline() {
        let state = request_lane_change(at(0));
        assert!(!state.tick(at(1_000)).active);
    }

    #[test]
    fn test_idle_tick_is_noop() {
        let idle = LaneChangeState::default();
        assert_eq!(idle.tick(at(99_999)), idle);
    }

    #[test]
    fn test_validator_rerequest_restarts_window() {
        let mut validator = LaneChangeValidator::default();
        assert!(!validator.is_active());

        validator.request(at(0));
        assert!(validator.tick(at(800)));
        validator.request(at(800));
        assert!(validator.tick(at(1_700)));
        assert!(!validator.tick(at(1_800)));
        assert!(!validator.is_active());
    }

    #[test]
    fn test_validator_custom_window() {
        let mut validator = LaneChangeValidator::new(Duration::from_millis(300));
        validator.request(at(100));
        assert_eq!(validator.state().expires_at, at(400));
        assert!(!validator.tick(at(400)));
    }
}

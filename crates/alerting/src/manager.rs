//! Beep Arbitrator Implementation

use adas::{Severity, Timestamp};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::pattern::BeepPattern;

/// Beep configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeepConfig {
    /// Minimum spacing between beep bursts (milliseconds, default: 800)
    pub debounce_ms: u64,
}

impl Default for BeepConfig {
    fn default() -> Self {
        Self { debounce_ms: 800 }
    }
}

impl BeepConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Debounce bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeepState {
    /// Last time a beep was actually dispatched
    pub last_trigger_at: Option<Timestamp>,
    /// Number of beeps dispatched
    pub fire_count: u64,
}

/// Chooses whether and which beep pattern to request each cycle
pub struct BeepArbitrator {
    config: BeepConfig,
    state: BeepState,
}

impl BeepArbitrator {
    /// Create a new beep arbitrator
    pub fn new(config: BeepConfig) -> Self {
        info!("Creating beep arbitrator with config: {:?}", config);
        Self {
            config,
            state: BeepState::default(),
        }
    }

    /// Request a pattern for `severity`, unless nothing is active or the
    /// previous beep is still inside the debounce window
    pub fn maybe_trigger(&mut self, severity: Severity, now: Timestamp) -> Option<BeepPattern> {
        let pattern = BeepPattern::for_severity(severity)?;

        if let Some(last) = self.state.last_trigger_at {
            if now.saturating_since(last) < self.config.debounce() {
                debug!("Beep suppressed: within {}ms debounce", self.config.debounce_ms);
                return None;
            }
        }

        self.state.last_trigger_at = Some(now);
        self.state.fire_count += 1;
        debug!("Beep requested: {:?} (count: {})", severity, self.state.fire_count);
        Some(pattern)
    }

    pub fn state(&self) -> BeepState {
        self.state
    }
}

impl Default for BeepArbitrator {
    fn default() -> Self {
        Self::new(BeepConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_no_beep_without_warning() {
        let mut arbitrator = BeepArbitrator::default();
        assert!(arbitrator.maybe_trigger(Severity::None, at(0)).is_none());
        assert_eq!(arbitrator.state().last_trigger_at, None);
    }

    #[test]
    fn test_debounce() {
        let mut arbitrator = BeepArbitrator::default();

        let first = arbitrator.maybe_trigger(Severity::High, at(10_000));
        assert_eq!(first.map(|p| p.severity), Some(Severity::High));

        // Immediate repeat should not fire
        assert!(arbitrator.maybe_trigger(Severity::High, at(10_799)).is_none());
        assert_eq!(arbitrator.state().last_trigger_at, Some(at(10_000)));

        assert!(arbitrator.maybe_trigger(Severity::High, at(10_800)).is_some());
        assert_eq!(arbitrator.state().fire_count, 2);
    }

    #[test]
    fn test_debounce_applies_across_severities() {
        let mut arbitrator = BeepArbitrator::default();
        assert!(arbitrator.maybe_trigger(Severity::Low, at(0)).is_some());
        assert!(arbitrator.maybe_trigger(Severity::High, at(100)).is_none());
    }

    #[test]
    fn test_none_does_not_touch_state() {
        let mut arbitrator = BeepArbitrator::default();
        arbitrator.maybe_trigger(Severity::Medium, at(0));
        arbitrator.maybe_trigger(Severity::None, at(900));
        assert_eq!(arbitrator.state().last_trigger_at, Some(at(0)));
    }

    #[test]
    fn test_custom_debounce() {
        let mut arbitrator = BeepArbitrator::new(BeepConfig { debounce_ms: 100 });
        assert!(arbitrator.maybe_trigger(Severity::Medium, at(0)).is_some());
        assert!(arbitrator.maybe_trigger(Severity::Medium, at(99)).is_none());
        assert!(arbitrator.maybe_trigger(Severity::Medium, at(100)).is_some());
    }
}

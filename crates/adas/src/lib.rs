//! Level-1 Advanced Driver Assistance System (ADAS) core
//!
//! Derives driver warnings from a vehicle sensor snapshot:
//! - Adaptive forward collision threshold from an estimated stopping distance
//! - Prioritized warning aggregation (lights, collision, tyres, hands, doors, lane change)
//! - Door safety interlock with a time-bounded blocked notice
//! - Lane-change request validation against the indicators
//!
//! Everything here is synchronous and deterministic; time comes in as a
//! [`Timestamp`] from the host's [`Clock`].

pub mod analysis;
pub mod clock;
pub mod config;
pub mod door;
pub mod fcw;
pub mod lane;
pub mod state;
pub mod warnings;

pub use analysis::{Severity, WarningEntry, WarningKind, WarningReport};
pub use clock::{Clock, ManualClock, MonotonicClock, Timestamp};
pub use config::{AdasConfig, FcwConfig};
pub use door::{DoorInterlock, DoorOutcome, DoorToggle};
pub use fcw::{adaptive_collision_threshold_m, estimate_stopping_distance_m};
pub use lane::{request_lane_change, LaneChangeState, LaneChangeValidator};
pub use state::{Door, VehicleState};
pub use warnings::{evaluate, WarningAggregator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ADAS error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdasError {
    #[error("Door index {0} out of range (expected 0..4)")]
    InvalidDoor(usize),

    #[error("Tyre index {0} out of range (expected 0..4)")]
    InvalidTyre(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result of one update cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdasAnalysis {
    /// Adaptive collision threshold for the current speed (meters)
    pub threshold_m: u32,

    /// Cap applied to the threshold (meters)
    pub max_threshold_m: u32,

    /// Active warnings
    pub report: WarningReport,
}

impl AdasAnalysis {
    pub fn overall_severity(&self) -> Severity {
        self.report.overall_severity()
    }
}

/// ADAS module: owns the interlock and lane-change state for the process lifetime.
///
/// The host keeps [`VehicleState::lane_change_requested`] in step with
/// [`lane_change_active`](Self::lane_change_active) after each request or tick.
pub struct AdasModule {
    config: AdasConfig,
    aggregator: WarningAggregator,
    doors: DoorInterlock,
    lane: LaneChangeValidator,
}

impl AdasModule {
    /// Create new ADAS module
    pub fn new(config: AdasConfig) -> Result<Self, AdasError> {
        config.validate()?;
        Ok(Self {
            aggregator: WarningAggregator::new(config.tyre_tolerance_psi),
            doors: DoorInterlock::new(config.door_block_notice()),
            lane: LaneChangeValidator::new(config.lane_change_window()),
            config,
        })
    }

    /// Compute threshold and warnings for the given snapshot
    pub fn analyze(&self, state: &VehicleState, now: Timestamp) -> AdasAnalysis {
        let threshold_m = self.config.fcw.collision_threshold_m(state.speed_kmh);
        let report = self
            .aggregator
            .evaluate(state, threshold_m, self.doors.notice_active(now));

        AdasAnalysis {
            threshold_m,
            max_threshold_m: self.config.fcw.max_threshold_m,
            report,
        }
    }

    /// Forward a door button press to the interlock
    pub fn toggle_door(&mut self, door: Door, state: &VehicleState, now: Timestamp) -> DoorToggle {
        self.doors.attempt_toggle(door, state, now)
    }

    pub fn door_notice_active(&self, now: Timestamp) -> bool {
        self.doors.notice_active(now)
    }

    pub fn request_lane_change(&mut self, now: Timestamp) -> LaneChangeState {
        self.lane.request(now)
    }

    /// Returns whether the lane-change request is still active
    pub fn tick_lane_change(&mut self, now: Timestamp) -> bool {
        self.lane.tick(now)
    }

    pub fn lane_change_active(&self) -> bool {
        self.lane.is_active()
    }
}

impl Default for AdasModule {
    fn default() -> Self {
        Self {
            config: AdasConfig::default(),
            aggregator: WarningAggregator::default(),
            doors: DoorInterlock::default(),
            lane: LaneChangeValidator::default(),
        }
    }
}

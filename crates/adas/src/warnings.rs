//! Multi-source warning aggregation

use crate::analysis::{WarningEntry, WarningKind, WarningReport};
use crate::state::VehicleState;

/// Evaluates every warning rule against a vehicle snapshot
#[derive(Debug, Clone)]
pub struct WarningAggregator {
    tyre_tolerance_psi: i32,
}

impl WarningAggregator {
    pub fn new(tyre_tolerance_psi: i32) -> Self {
        Self { tyre_tolerance_psi }
    }

    /// Run all rules in their fixed order.
    ///
    /// `threshold_m` is the adaptive collision threshold for the current speed;
    /// `door_notice_active` is the door interlock's blocked-attempt notice.
    pub fn evaluate(
        &self,
        state: &VehicleState,
        threshold_m: u32,
        door_notice_active: bool,
    ) -> WarningReport {
        let mut kinds = Vec::new();

        // Headlights: at most one of the two rules
        if state.night_mode && !state.headlights_on {
            kinds.push(WarningKind::HeadlightsOffAtNight);
        } else if !state.night_mode && state.headlights_on {
            kinds.push(WarningKind::HeadlightsOnInDay);
        }

        if state.front_distance_m < threshold_m {
            kinds.push(WarningKind::ForwardCollision { threshold_m });
        }

        let min_pressure = state.base_tyre_pressure_psi - self.tyre_tolerance_psi;
        for (tyre, &psi) in state.tyre_pressure_psi.iter().enumerate() {
            if psi < min_pressure {
                kinds.push(WarningKind::LowTyrePressure { tyre });
            }
        }

        if !state.hands_on_wheel {
            kinds.push(WarningKind::HandsOffWheel);
        }

        if state.any_door_open() {
            if state.speed_kmh > 0 {
                kinds.push(WarningKind::DoorOpenWhileMoving);
            }
            if state.door_obstacle {
                kinds.push(WarningKind::DoorObstacleExit);
            }
        }

        if door_notice_active {
            kinds.push(WarningKind::DoorOpeningBlocked);
        }

        // A safe lane change produces no message
        if state.lane_change_requested && !state.any_indicator() {
            kinds.push(WarningKind::LaneChangeWithoutIndicator);
        }

        WarningReport::new(kinds.into_iter().map(WarningEntry::from).collect())
    }
}

impl Default for WarningAggregator {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Evaluate all warning rules with the default tyre tolerance
pub fn evaluate(state: &VehicleState, threshold_m: u32, door_notice_active: bool) -> WarningReport {
    WarningAggregator::default().evaluate(state, threshold_m, door_notice_active)
}

//! Door safety interlock

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::clock::Timestamp;
use crate::state::{Door, VehicleState};

/// What a door button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DoorOutcome {
    Opened,
    Closed,
    /// Open attempt denied; the notice shows until `until`
    Blocked { until: Timestamp },
}

/// Result of [`DoorInterlock::attempt_toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorToggle {
    /// Door-open array the host should apply
    pub doors: [bool; 4],
    pub outcome: DoorOutcome,
}

/// Gates door-open requests against obstacles and vehicle motion
#[derive(Debug, Clone)]
pub struct DoorInterlock {
    blocked_until: Option<Timestamp>,
    notice: Duration,
}

impl DoorInterlock {
    pub fn new(notice: Duration) -> Self {
        Self {
            blocked_until: None,
            notice,
        }
    }

    /// Handle a door button press.
    ///
    /// Closing always succeeds. Opening is denied while an obstacle is
    /// present or the vehicle is moving; a denial leaves the door closed and
    /// (re)arms the blocked notice.
    pub fn attempt_toggle(&mut self, door: Door, state: &VehicleState, now: Timestamp) -> DoorToggle {
        let mut doors = state.door_open;
        let slot = door.index();

        if doors[slot] {
            doors[slot] = false;
            info!("Door {} closed", door.label());
            return DoorToggle {
                doors,
                outcome: DoorOutcome::Closed,
            };
        }

        if state.door_obstacle || state.speed_kmh > 0 {
            let until = now.after(self.notice);
            self.blocked_until = Some(until);
            debug!(
                "Door {} open blocked (obstacle={}, speed={} km/h)",
                door.label(),
                state.door_obstacle,
                state.speed_kmh
            );
            return DoorToggle {
                doors,
                outcome: DoorOutcome::Blocked { until },
            };
        }

        doors[slot] = true;
        info!("Door {} opened", door.label());
        DoorToggle {
            doors,
            outcome: DoorOutcome::Opened,
        }
    }

    /// Whether the blocked-attempt notice is still showing
    pub fn notice_active(&self, now: Timestamp) -> bool {
        self.blocked_until.is_some_and(|until| now < until)
    }

    pub fn blocked_until(&self) -> Option<Timestamp> {
        self.blocked_until
    }
}

impl Default for DoorInterlock {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

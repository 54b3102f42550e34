//! Vehicle sensor and toggle state

use serde::{Deserialize, Serialize};

use crate::AdasError;

/// Door position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

impl Door {
    pub const ALL: [Door; 4] = [
        Door::FrontLeft,
        Door::FrontRight,
        Door::RearLeft,
        Door::RearRight,
    ];

    /// Slot in [`VehicleState::door_open`]
    pub fn index(self) -> usize {
        match self {
            Door::FrontLeft => 0,
            Door::FrontRight => 1,
            Door::RearLeft => 2,
            Door::RearRight => 3,
        }
    }

    /// Checked conversion from a host-supplied index
    pub fn from_index(index: usize) -> Result<Self, AdasError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(AdasError::InvalidDoor(index))
    }

    /// Short MID label
    pub fn label(self) -> &'static str {
        match self {
            Door::FrontLeft => "FL",
            Door::FrontRight => "FR",
            Door::RearLeft => "RL",
            Door::RearRight => "RR",
        }
    }
}

/// Snapshot of everything the driver-assistance core reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Vehicle speed (km/h)
    pub speed_kmh: u32,

    /// Distance to the obstacle ahead (meters)
    pub front_distance_m: u32,

    /// Reference tyre pressure (psi)
    pub base_tyre_pressure_psi: i32,

    /// Per-tyre pressure (psi), T1..T4
    pub tyre_pressure_psi: [i32; 4],

    pub headlights_on: bool,
    pub night_mode: bool,
    pub hands_on_wheel: bool,
    pub left_indicator: bool,
    pub right_indicator: bool,

    /// Obstacle detected next to the doors
    pub door_obstacle: bool,

    /// Indexed by [`Door::index`]
    pub door_open: [bool; 4],

    pub lane_change_requested: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            speed_kmh: 0,
            front_distance_m: 50,
            base_tyre_pressure_psi: 32,
            tyre_pressure_psi: [32; 4],
            headlights_on: false,
            night_mode: false,
            hands_on_wheel: true,
            left_indicator: false,
            right_indicator: false,
            door_obstacle: false,
            door_open: [false; 4],
            lane_change_requested: false,
        }
    }
}

impl VehicleState {
    pub fn any_door_open(&self) -> bool {
        self.door_open.iter().any(|&open| open)
    }

    pub fn any_indicator(&self) -> bool {
        self.left_indicator || self.right_indicator
    }

    /// Set the reference pressure and re-sync every tyre to it
    pub fn set_base_pressure(&mut self, psi: i32) {
        self.base_tyre_pressure_psi = psi;
        self.tyre_pressure_psi = [psi; 4];
    }

    /// Set a single tyre pressure (0-based index)
    pub fn set_tyre_pressure(&mut self, tyre: usize, psi: i32) -> Result<(), AdasError> {
        let slot = self
            .tyre_pressure_psi
            .get_mut(tyre)
            .ok_or(AdasError::InvalidTyre(tyre))?;
        *slot = psi;
        Ok(())
    }

    /// Toggle the left indicator; switching it on cancels the right one
    pub fn toggle_left_indicator(&mut self) {
        self.left_indicator = !self.left_indicator;
        if self.left_indicator {
            self.right_indicator = false;
        }
    }

    /// Toggle the right indicator; switching it on cancels the left one
    pub fn toggle_right_indicator(&mut self) {
        self.right_indicator = !self.right_indicator;
        if self.right_indicator {
            self.left_indicator = false;
        }
    }
}

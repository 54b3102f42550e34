//! ADAS configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::AdasError;

/// Forward collision threshold parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcwConfig {
    /// Driver reaction time (seconds)
    pub reaction_time_s: f64,

    /// Tyre/road friction coefficient
    pub friction_coefficient: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity_mps2: f64,

    /// Own vehicle length added to the stopping distance (meters)
    pub vehicle_length_m: f64,

    /// Extra margin before rounding up (meters)
    pub safety_margin_m: f64,

    /// Upper bound of the adaptive threshold (meters)
    pub max_threshold_m: u32,
}

impl Default for FcwConfig {
    fn default() -> Self {
        Self {
            reaction_time_s: 1.8,
            friction_coefficient: 0.7,
            gravity_mps2: 9.81,
            vehicle_length_m: 5.0,
            safety_margin_m: 0.5,
            max_threshold_m: 50,
        }
    }
}

/// ADAS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdasConfig {
    /// Forward collision warning parameters
    pub fcw: FcwConfig,

    /// A tyre is under-inflated when below `base - tolerance` (psi)
    pub tyre_tolerance_psi: i32,

    /// How long a denied door-open attempt stays on the MID (milliseconds)
    pub door_block_notice_ms: u64,

    /// How long a lane-change request stays active (milliseconds)
    pub lane_change_window_ms: u64,
}

impl Default for AdasConfig {
    fn default() -> Self {
        Self {
            fcw: FcwConfig::default(),
            tyre_tolerance_psi: 4,
            door_block_notice_ms: 2000,
            lane_change_window_ms: 1000,
        }
    }
}

impl AdasConfig {
    /// Door-block notice duration
    pub fn door_block_notice(&self) -> Duration {
        Duration::from_millis(self.door_block_notice_ms)
    }

    /// Lane-change request window
    pub fn lane_change_window(&self) -> Duration {
        Duration::from_millis(self.lane_change_window_ms)
    }

    /// Reject parameter sets the estimator cannot work with
    pub fn validate(&self) -> Result<(), AdasError> {
        let fcw = &self.fcw;
        if !(fcw.friction_coefficient > 0.0) || !(fcw.gravity_mps2 > 0.0) {
            return Err(AdasError::InvalidConfig(
                "friction coefficient and gravity must be positive".to_string(),
            ));
        }
        if fcw.reaction_time_s < 0.0 || fcw.vehicle_length_m < 0.0 || fcw.safety_margin_m < 0.0 {
            return Err(AdasError::InvalidConfig(
                "reaction time, vehicle length and margin must not be negative".to_string(),
            ));
        }
        if fcw.max_threshold_m == 0 {
            return Err(AdasError::InvalidConfig(
                "max collision threshold must be non-zero".to_string(),
            ));
        }
        if self.tyre_tolerance_psi < 0 {
            return Err(AdasError::InvalidConfig(format!(
                "tyre tolerance {} psi is negative",
                self.tyre_tolerance_psi
            )));
        }
        Ok(())
    }
}

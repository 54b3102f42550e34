//! Simulator host controller
//!
//! Owns the vehicle snapshot and every piece of core state, and runs one
//! update cycle per input event: analyze, arbitrate the beep, dispatch it.

use adas::{
    AdasModule, Clock, Door, DoorToggle, Severity, Timestamp, VehicleState, WarningEntry,
};
use alerting::{AudioDispatcher, BeepArbitrator, BeepPattern};
use data_validator::{SensorUpdate, Validator};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::settings::Settings;

/// Boolean inputs the operator can flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Headlights,
    NightMode,
    HandsOnWheel,
    LeftIndicator,
    RightIndicator,
    DoorObstacle,
}

impl FromStr for Toggle {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headlights" => Ok(Toggle::Headlights),
            "night_mode" => Ok(Toggle::NightMode),
            "hands_on_wheel" => Ok(Toggle::HandsOnWheel),
            "left_indicator" => Ok(Toggle::LeftIndicator),
            "right_indicator" => Ok(Toggle::RightIndicator),
            "door_obstacle" => Ok(Toggle::DoorObstacle),
            other => Err(ApiError::UnknownToggle(other.to_string())),
        }
    }
}

/// Everything the MID shows for one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MidSnapshot {
    pub timestamp_ms: u64,
    pub vehicle: VehicleState,
    pub threshold_m: u32,
    pub max_threshold_m: u32,
    pub warnings: Vec<WarningEntry>,
    pub overall_severity: Severity,
    pub lane_change_active: bool,
    pub door_notice_active: bool,
    /// Beep requested by this cycle, if any
    pub beep: Option<BeepPattern>,
}

/// Host-side owner of vehicle state and core state
pub struct Controller {
    vehicle: VehicleState,
    adas: AdasModule,
    beeper: BeepArbitrator,
    audio: AudioDispatcher,
    validator: Validator,
    clock: Arc<dyn Clock>,
}

impl Controller {
    pub fn new(
        settings: &Settings,
        clock: Arc<dyn Clock>,
        audio: AudioDispatcher,
    ) -> Result<Self, ApiError> {
        settings.bounds.validate()?;
        Ok(Self {
            vehicle: VehicleState::default(),
            adas: AdasModule::new(settings.adas.clone())?,
            beeper: BeepArbitrator::new(settings.beep.clone()),
            audio,
            validator: Validator::new(settings.bounds.clone()),
            clock,
        })
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Current MID contents, without requesting a beep
    pub fn snapshot(&self) -> MidSnapshot {
        self.build_snapshot(self.now())
    }

    /// Run a full update cycle: analyze, then arbitrate and dispatch a beep
    pub fn refresh(&mut self) -> MidSnapshot {
        let now = self.now();
        let mut snapshot = self.build_snapshot(now);
        snapshot.beep = self.beeper.maybe_trigger(snapshot.overall_severity, now);
        if let Some(pattern) = snapshot.beep {
            self.audio.dispatch(pattern);
        }
        snapshot
    }

    fn build_snapshot(&self, now: Timestamp) -> MidSnapshot {
        let analysis = self.adas.analyze(&self.vehicle, now);
        MidSnapshot {
            timestamp_ms: now.as_millis(),
            vehicle: self.vehicle.clone(),
            threshold_m: analysis.threshold_m,
            max_threshold_m: analysis.max_threshold_m,
            overall_severity: analysis.overall_severity(),
            warnings: analysis.report.entries().to_vec(),
            lane_change_active: self.adas.lane_change_active(),
            door_notice_active: self.adas.door_notice_active(now),
            beep: None,
        }
    }

    /// Apply validated slider values; nothing changes if any field is out of range
    pub fn apply_sensors(&mut self, update: &SensorUpdate) -> Result<MidSnapshot, ApiError> {
        self.validator.validate_update(update).into_result()?;

        // Bounds validated in `new` fit the state's integer types
        if let Some(speed) = update.speed_kmh {
            self.vehicle.speed_kmh = speed as u32;
        }
        if let Some(distance) = update.front_distance_m {
            self.vehicle.front_distance_m = distance as u32;
        }
        if let Some(base) = update.base_tyre_pressure_psi {
            self.vehicle.set_base_pressure(base as i32);
        }
        if let Some(tyres) = &update.tyre_pressure_psi {
            for (tyre, &psi) in tyres.iter().enumerate() {
                self.vehicle.set_tyre_pressure(tyre, psi as i32)?;
            }
        }
        debug!("Sensors updated: {:?}", update);

        Ok(self.refresh())
    }

    pub fn toggle(&mut self, toggle: Toggle) -> MidSnapshot {
        let v = &mut self.vehicle;
        match toggle {
            Toggle::Headlights => v.headlights_on = !v.headlights_on,
            Toggle::NightMode => v.night_mode = !v.night_mode,
            Toggle::HandsOnWheel => v.hands_on_wheel = !v.hands_on_wheel,
            Toggle::LeftIndicator => v.toggle_left_indicator(),
            Toggle::RightIndicator => v.toggle_right_indicator(),
            Toggle::DoorObstacle => v.door_obstacle = !v.door_obstacle,
        }
        debug!("Toggled {:?}", toggle);
        self.refresh()
    }

    /// Forward a door button press and apply the returned door array
    pub fn toggle_door(&mut self, door: Door) -> (DoorToggle, MidSnapshot) {
        let now = self.now();
        let toggle = self.adas.toggle_door(door, &self.vehicle, now);
        self.vehicle.door_open = toggle.doors;
        (toggle, self.refresh())
    }

    pub fn request_lane_change(&mut self) -> MidSnapshot {
        let now = self.now();
        self.adas.request_lane_change(now);
        self.vehicle.lane_change_requested = true;
        info!("Lane change requested");
        self.refresh()
    }

    /// Recurring lane tick; returns whether the request is still active
    pub fn tick_lane_change(&mut self) -> bool {
        let now = self.now();
        let active = self.adas.tick_lane_change(now);
        self.vehicle.lane_change_requested = active;
        self.refresh();
        active
    }
}

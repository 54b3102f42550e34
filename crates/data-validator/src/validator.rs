//! Input Validator for Range Checking

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Accepted input ranges (inclusive), matching the simulator's slider bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBounds {
    /// Speed valid range (km/h)
    pub speed_range: (i64, i64),
    /// Front obstacle distance valid range (m)
    pub front_distance_range: (i64, i64),
    /// Base and per-tyre pressure valid range (psi)
    pub pressure_range: (i64, i64),
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            speed_range: (0, 180),
            front_distance_range: (0, 50),
            pressure_range: (20, 40),
        }
    }
}

impl InputBounds {
    /// Check the ranges fit the vehicle state: speed and distance are
    /// unsigned, pressures are `i32`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let unsigned = 0..=i64::from(u32::MAX);
        let signed = i64::from(i32::MIN)..=i64::from(i32::MAX);
        let checks = [
            ("speed_range", self.speed_range, &unsigned),
            ("front_distance_range", self.front_distance_range, &unsigned),
            ("pressure_range", self.pressure_range, &signed),
        ];
        for (field, (min, max), allowed) in checks {
            if min > max || !allowed.contains(&min) || !allowed.contains(&max) {
                return Err(ValidationError::InvalidBounds { field, min, max });
            }
        }
        Ok(())
    }
}

/// Partial sensor update as received from the host's input surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorUpdate {
    pub speed_kmh: Option<i64>,
    pub front_distance_m: Option<i64>,
    /// Setting the base re-syncs every tyre to it
    pub base_tyre_pressure_psi: Option<i64>,
    /// All four tyres, T1..T4
    pub tyre_pressure_psi: Option<Vec<i64>>,
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Convert into the first error, if any
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Validator for host sensor input
pub struct Validator {
    bounds: InputBounds,
}

impl Validator {
    /// Create a new validator with given bounds
    pub fn new(bounds: InputBounds) -> Self {
        Self { bounds }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: i64,
        range: (i64, i64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate speed
    pub fn validate_speed(&self, speed_kmh: i64) -> Result<(), ValidationError> {
        self.validate_range("speed_kmh", speed_kmh, self.bounds.speed_range)
    }

    /// Validate front distance
    pub fn validate_front_distance(&self, distance_m: i64) -> Result<(), ValidationError> {
        self.validate_range("front_distance_m", distance_m, self.bounds.front_distance_range)
    }

    /// Validate a base or tyre pressure
    pub fn validate_pressure(&self, field: &'static str, psi: i64) -> Result<(), ValidationError> {
        self.validate_range(field, psi, self.bounds.pressure_range)
    }

    /// Validate every field present in `update`
    pub fn validate_update(&self, update: &SensorUpdate) -> ValidationResult {
        let mut errors = Vec::new();
        let mut fields_checked = 0;

        let mut check = |result: Result<(), ValidationError>| {
            fields_checked += 1;
            if let Err(e) = result {
                errors.push(e);
            }
        };

        if let Some(speed) = update.speed_kmh {
            check(self.validate_speed(speed));
        }
        if let Some(distance) = update.front_distance_m {
            check(self.validate_front_distance(distance));
        }
        if let Some(base) = update.base_tyre_pressure_psi {
            check(self.validate_pressure("base_tyre_pressure_psi", base));
        }
        if let Some(tyres) = &update.tyre_pressure_psi {
            if tyres.len() != 4 {
                check(Err(ValidationError::WrongTyreCount(tyres.len())));
            } else {
                for &psi in tyres {
                    check(self.validate_pressure("tyre_pressure_psi", psi));
                }
            }
        }

        for e in &errors {
            warn!("Rejected sensor input: {}", e);
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            fields_checked,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(InputBounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_speed() {
        let validator = Validator::default();
        assert!(validator.validate_speed(0).is_ok());
        assert!(validator.validate_speed(90).is_ok());
        assert!(validator.validate_speed(180).is_ok());
    }

    #[test]
    fn test_invalid_speed() {
        let validator = Validator::default();
        assert_eq!(
            validator.validate_speed(-1),
            Err(ValidationError::OutOfRange {
                field: "speed_kmh",
                value: -1,
                min: 0,
                max: 180,
            })
        );
        assert!(validator.validate_speed(181).is_err());
    }

    #[test]
    fn test_front_distance_range() {
        let validator = Validator::default();
        assert!(validator.validate_front_distance(0).is_ok());
        assert!(validator.validate_front_distance(50).is_ok());
        assert!(validator.validate_front_distance(51).is_err());
    }

    #[test]
    fn test_update_collects_all_errors() {
        let validator = Validator::default();
        let update = SensorUpdate {
            speed_kmh: Some(200),
            front_distance_m: Some(10),
            base_tyre_pressure_psi: Some(19),
            tyre_pressure_psi: None,
        };
        let result = validator.validate_update(&update);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.fields_checked, 3);
    }

    #[test]
    fn test_tyre_count() {
        let validator = Validator::default();
        let update = SensorUpdate {
            tyre_pressure_psi: Some(vec![32, 32, 32]),
            ..Default::default()
        };
        assert_eq!(
            validator.validate_update(&update).into_result(),
            Err(ValidationError::WrongTyreCount(3))
        );
    }

    #[test]
    fn test_empty_update_is_valid() {
        let result = Validator::default().validate_update(&SensorUpdate::default());
        assert!(result.valid);
        assert_eq!(result.fields_checked, 0);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_default_bounds_are_valid() {
        assert!(InputBounds::default().validate().is_ok());
    }

    #[test]
    fn test_negative_distance_bound_rejected() {
        let bounds = InputBounds {
            front_distance_range: (-10, 50),
            ..Default::default()
        };
        assert_eq!(
            bounds.validate(),
            Err(ValidationError::InvalidBounds {
                field: "front_distance_range",
                min: -10,
                max: 50,
            })
        );
    }

    #[test]
    fn test_out_of_type_bounds_rejected() {
        let speed = InputBounds {
            speed_range: (0, i64::from(u32::MAX) + 1),
            ..Default::default()
        };
        assert!(speed.validate().is_err());

        let pressure = InputBounds {
            pressure_range: (20, i64::from(i32::MAX) + 1),
            ..Default::default()
        };
        assert!(pressure.validate().is_err());

        let inverted = InputBounds {
            speed_range: (180, 0),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_in_range_updates_pass(
            speed in 0i64..=180,
            distance in 0i64..=50,
            tyres in proptest::collection::vec(20i64..=40, 4),
        ) {
            let update = SensorUpdate {
                speed_kmh: Some(speed),
                front_distance_m: Some(distance),
                base_tyre_pressure_psi: Some(tyres[0]),
                tyre_pressure_psi: Some(tyres),
            };
            prop_assert!(Validator::default().validate_update(&update).valid);
        }
    }
}

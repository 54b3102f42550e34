//! Forward collision warning: stopping distance and adaptive threshold

use crate::config::FcwConfig;

impl FcwConfig {
    /// Reaction distance plus braking distance `v² / (2·μ·g)` at the given speed
    pub fn stopping_distance_m(&self, speed_kmh: u32) -> f64 {
        let v = speed_kmh as f64 * 1000.0 / 3600.0; // m/s
        let reaction_distance = v * self.reaction_time_s;
        let braking_distance = (v * v) / (2.0 * self.friction_coefficient * self.gravity_mps2);
        reaction_distance + braking_distance
    }

    /// Following distance below which a forward collision warning is raised
    pub fn collision_threshold_m(&self, speed_kmh: u32) -> u32 {
        let raw = self.stopping_distance_m(speed_kmh) + self.vehicle_length_m + self.safety_margin_m;
        raw.ceil().min(self.max_threshold_m as f64) as u32
    }
}

/// Estimated stopping distance (meters) with the default vehicle model
pub fn estimate_stopping_distance_m(speed_kmh: u32) -> f64 {
    FcwConfig::default().stopping_distance_m(speed_kmh)
}

/// Adaptive collision threshold (meters) with the default vehicle model, capped at 50 m
pub fn adaptive_collision_threshold_m(speed_kmh: u32) -> u32 {
    FcwConfig::default().collision_threshold_m(speed_kmh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stopping_distance_at_standstill() {
        assert_eq!(estimate_stopping_distance_m(0), 0.0);
    }

    #[test]
    fn test_stopping_distance_at_100kmh() {
        let d = estimate_stopping_distance_m(100);
        // 1.8 * 27.78 + 27.78² / (2 * 0.7 * 9.81)
        assert!((d - 106.2).abs() < 0.2, "got {d}");
    }

    #[test]
    fn test_threshold_at_standstill() {
        // ceil(0 + 5.0 + 0.5)
        assert_eq!(adaptive_collision_threshold_m(0), 6);
    }

    #[test]
    fn test_threshold_at_city_speed() {
        // 15.0 + 5.06 + 5.5 = 25.56
        assert_eq!(adaptive_collision_threshold_m(30), 26);
    }

    #[test]
    fn test_threshold_clamps_at_cap() {
        assert_eq!(adaptive_collision_threshold_m(100), 50);
        assert_eq!(adaptive_collision_threshold_m(180), 50);
    }

    #[test]
    fn test_custom_cap() {
        let config = FcwConfig {
            max_threshold_m: 20,
            ..Default::default()
        };
        assert_eq!(config.collision_threshold_m(0), 6);
        assert_eq!(config.collision_threshold_m(60), 20);
    }

    proptest! {
        #[test]
        fn prop_threshold_monotonic_and_capped(speed in 0u32..400) {
            let here = adaptive_collision_threshold_m(speed);
            let next = adaptive_collision_threshold_m(speed + 1);
            prop_assert!(here <= next);
            prop_assert!(next <= 50);
            prop_assert!(here >= 6);
        }

        #[test]
        fn prop_stopping_distance_non_negative(speed in 0u32..1000) {
            prop_assert!(estimate_stopping_distance_m(speed) >= 0.0);
        }
    }
}

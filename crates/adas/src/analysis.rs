//! Warning severities, entries and the per-cycle report

use serde::{Deserialize, Serialize};

/// Ordered warning priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

/// Source of a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    /// Night mode without headlights
    HeadlightsOffAtNight,

    /// Headlights on during the day
    HeadlightsOnInDay,

    /// Front obstacle closer than the adaptive threshold
    ForwardCollision { threshold_m: u32 },

    /// One tyre below the reference pressure (0-based tyre index)
    LowTyrePressure { tyre: usize },

    HandsOffWheel,

    DoorOpenWhileMoving,

    /// Door open with an obstacle next to it
    DoorObstacleExit,

    /// A door-open attempt was recently denied
    DoorOpeningBlocked,

    /// Lane change requested with no indicator set
    LaneChangeWithoutIndicator,
}

impl WarningKind {
    pub fn severity(self) -> Severity {
        match self {
            WarningKind::ForwardCollision { .. }
            | WarningKind::DoorOpenWhileMoving
            | WarningKind::DoorObstacleExit => Severity::High,
            WarningKind::HeadlightsOffAtNight
            | WarningKind::LowTyrePressure { .. }
            | WarningKind::HandsOffWheel
            | WarningKind::DoorOpeningBlocked => Severity::Medium,
            WarningKind::HeadlightsOnInDay | WarningKind::LaneChangeWithoutIndicator => {
                Severity::Low
            }
        }
    }

    /// Driver-facing text for the MID
    pub fn message(self) -> String {
        match self {
            WarningKind::HeadlightsOffAtNight => "Headlights OFF (night)".to_string(),
            WarningKind::HeadlightsOnInDay => "Headlights ON (day)".to_string(),
            WarningKind::ForwardCollision { threshold_m } => {
                format!("Forward Collision Warning (threshold {} m)", threshold_m)
            }
            // Same text for every tyre; the index lives in the kind
            WarningKind::LowTyrePressure { .. } => "Low Tyre Pressure".to_string(),
            WarningKind::HandsOffWheel => "Hands Off Steering".to_string(),
            WarningKind::DoorOpenWhileMoving => "Door Open While Moving".to_string(),
            WarningKind::DoorObstacleExit => {
                "Exit Warning: Obstacle Detected - Close Door".to_string()
            }
            WarningKind::DoorOpeningBlocked => {
                "Door opening blocked: obstacle or vehicle moving".to_string()
            }
            WarningKind::LaneChangeWithoutIndicator => {
                "Lane Change! Please Use indicator".to_string()
            }
        }
    }
}

/// A single active warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEntry {
    pub kind: WarningKind,
    pub text: String,
    pub severity: Severity,
}

impl From<WarningKind> for WarningEntry {
    fn from(kind: WarningKind) -> Self {
        Self {
            kind,
            text: kind.message(),
            severity: kind.severity(),
        }
    }
}

/// Active warnings of one update cycle, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningReport {
    entries: Vec<WarningEntry>,
    overall_severity: Severity,
}

impl WarningReport {
    /// Build a report; the overall severity is the maximum over `entries`
    pub fn new(entries: Vec<WarningEntry>) -> Self {
        let overall_severity = entries
            .iter()
            .map(|e| e.severity)
            .max()
            .unwrap_or(Severity::None);
        Self {
            entries,
            overall_severity,
        }
    }

    pub fn entries(&self) -> &[WarningEntry] {
        &self.entries
    }

    pub fn overall_severity(&self) -> Severity {
        self.overall_severity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries of the given kind
    pub fn count_kind(&self, predicate: impl Fn(&WarningKind) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.kind)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_empty_report() {
        let report = WarningReport::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.overall_severity(), Severity::None);
    }

    #[test]
    fn test_overall_is_max() {
        let report = WarningReport::new(vec![
            WarningKind::HeadlightsOnInDay.into(),
            WarningKind::DoorObstacleExit.into(),
            WarningKind::HandsOffWheel.into(),
        ]);
        assert_eq!(report.overall_severity(), Severity::High);
        assert_eq!(report.len(), 3);
        assert_eq!(report.entries()[0].severity, Severity::Low);
    }

    #[test]
    fn test_forward_collision_text_carries_threshold() {
        let entry = WarningEntry::from(WarningKind::ForwardCollision { threshold_m: 26 });
        assert_eq!(entry.text, "Forward Collision Warning (threshold 26 m)");
        assert_eq!(entry.severity, Severity::High);
    }

    #[test]
    fn test_tyre_entries_share_text() {
        let a = WarningEntry::from(WarningKind::LowTyrePressure { tyre: 0 });
        let b = WarningEntry::from(WarningKind::LowTyrePressure { tyre: 3 });
        assert_eq!(a.text, b.text);
        assert_ne!(a, b);
    }
}

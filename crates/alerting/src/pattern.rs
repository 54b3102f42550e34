//! Beep patterns keyed by severity

use adas::Severity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System alert sound played after the pulses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackCue {
    /// Strong cue for high severity
    Critical,
    /// Moderate cue for medium severity
    Exclamation,
    /// Soft cue for low severity
    Asterisk,
}

/// A single pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u64,
}

impl Tone {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Pulse sequence plus fallback cue requested for one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeepPattern {
    pub severity: Severity,
    pub tone: Tone,
    pub pulses: u8,
    /// Silence between consecutive pulses
    pub gap_ms: u64,
    pub fallback: FallbackCue,
}

impl BeepPattern {
    /// Pattern for a severity; `None` has no pattern
    pub fn for_severity(severity: Severity) -> Option<Self> {
        let pattern = match severity {
            Severity::None => return None,
            Severity::High => Self {
                severity,
                tone: Tone {
                    frequency_hz: 1200,
                    duration_ms: 150,
                },
                pulses: 3,
                gap_ms: 100,
                fallback: FallbackCue::Critical,
            },
            Severity::Medium => Self {
                severity,
                tone: Tone {
                    frequency_hz: 900,
                    duration_ms: 200,
                },
                pulses: 2,
                gap_ms: 150,
                fallback: FallbackCue::Exclamation,
            },
            Severity::Low => Self {
                severity,
                tone: Tone {
                    frequency_hz: 700,
                    duration_ms: 200,
                },
                pulses: 1,
                gap_ms: 0,
                fallback: FallbackCue::Asterisk,
            },
        };
        Some(pattern)
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    /// Wall-clock time the pulses take to play
    pub fn play_time(&self) -> Duration {
        let pulses = self.pulses as u64;
        Duration::from_millis(
            pulses * self.tone.duration_ms + pulses.saturating_sub(1) * self.gap_ms,
        )
    }
}

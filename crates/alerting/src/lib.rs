//! Alerting System
//!
//! Turns the overall warning severity into audible beep requests:
//! debounced arbitration, the severity-keyed pattern table, and
//! fire-and-forget playback off the decision thread.

mod dispatch;
mod manager;
mod pattern;

pub use dispatch::{play_pattern, AudioDispatcher, LogSink, ToneSink};
pub use manager::{BeepArbitrator, BeepConfig, BeepState};
pub use pattern::{BeepPattern, FallbackCue, Tone};

use thiserror::Error;

/// Alerting error types
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Audio dispatcher needs a running tokio runtime")]
    NoRuntime,
}

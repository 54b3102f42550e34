//! Asynchronous beep playback

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::pattern::{BeepPattern, FallbackCue, Tone};
use crate::AlertError;

/// Audio output used by the playback task
pub trait ToneSink: Send + Sync + 'static {
    /// Start a pulse; the playback task waits out its duration
    fn tone(&self, tone: Tone);

    /// Play the fallback system cue
    fn cue(&self, cue: FallbackCue);
}

/// Sink that reports every pulse through `tracing` instead of a speaker
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ToneSink for LogSink {
    fn tone(&self, tone: Tone) {
        info!("BEEP {} Hz for {} ms", tone.frequency_hz, tone.duration_ms);
    }

    fn cue(&self, cue: FallbackCue) {
        info!("Fallback cue: {:?}", cue);
    }
}

/// Play a pattern to completion on `sink`
pub async fn play_pattern(sink: Arc<dyn ToneSink>, pattern: BeepPattern) {
    for pulse in 0..pattern.pulses {
        if pulse > 0 {
            sleep(pattern.gap()).await;
        }
        sink.tone(pattern.tone);
        sleep(pattern.tone.duration()).await;
    }
    sink.cue(pattern.fallback);
    debug!("Beep pattern {:?} finished", pattern.severity);
}

/// Hands beep patterns to detached playback tasks.
///
/// [`dispatch`](Self::dispatch) returns immediately; the task owns its copy
/// of the pattern, is never cancelled and is never awaited.
#[derive(Clone)]
pub struct AudioDispatcher {
    sink: Arc<dyn ToneSink>,
    runtime: Handle,
}

impl AudioDispatcher {
    /// Create a dispatcher on the current tokio runtime
    pub fn new(sink: Arc<dyn ToneSink>) -> Result<Self, AlertError> {
        let runtime = Handle::try_current().map_err(|_| AlertError::NoRuntime)?;
        Ok(Self::with_handle(sink, runtime))
    }

    pub fn with_handle(sink: Arc<dyn ToneSink>, runtime: Handle) -> Self {
        Self { sink, runtime }
    }

    /// Start playing `pattern` without blocking the caller
    pub fn dispatch(&self, pattern: BeepPattern) {
        debug!(
            "Dispatching beep pattern {:?} ({} ms)",
            pattern.severity,
            pattern.play_time().as_millis()
        );
        // Detached: dropping the JoinHandle does not cancel the task
        self.runtime.spawn(play_pattern(Arc::clone(&self.sink), pattern));
    }
}

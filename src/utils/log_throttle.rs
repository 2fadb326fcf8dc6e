//! Rate limiting for repetitive debug events such as store cache hits.

use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Window {
    started_at: Instant,
    suppressed: u64,
}

/// Lets one event through per `interval` and counts the ones held back.
///
/// Each owner keeps its own throttle, so a store instance never shares
/// a window with another.
#[derive(Debug)]
pub struct LogThrottle {
    interval: Duration,
    window: Mutex<Option<Window>>,
}

impl LogThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window: Mutex::new(None),
        }
    }

    /// Returns the number of events suppressed since the last emitted one
    /// when this event should be logged, `None` when it should be dropped.
    pub fn should_emit(&self) -> Option<u64> {
        self.should_emit_at(Instant::now())
    }

    fn should_emit_at(&self, now: Instant) -> Option<u64> {
        let mut window = self
            .window
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match window.as_mut() {
            Some(w) if now.duration_since(w.started_at) < self.interval => {
                w.suppressed += 1;
                None
            }
            Some(w) => {
                let suppressed = w.suppressed;
                *w = Window {
                    started_at: now,
                    suppressed: 0,
                };
                Some(suppressed)
            }
            None => {
                *window = Some(Window {
                    started_at: now,
                    suppressed: 0,
                });
                Some(0)
            }
        }
    }
}

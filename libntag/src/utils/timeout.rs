//! Timeout helpers.
//!
//! Commands only advertise a nominal timeout; enforcing it is the
//! transport's job. The per-command values live in `constants`.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

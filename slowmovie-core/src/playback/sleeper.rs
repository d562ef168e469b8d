//! Blocking wait between frames.

use std::time::Duration;

/// Blocks the playback loop for the frame display delay.
///
/// Implementations must not return early; there is no skip or pause.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

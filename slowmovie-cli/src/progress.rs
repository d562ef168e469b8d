// ============================================================================
// slowmovie-cli/src/progress.rs
// ============================================================================
//
// COUNTDOWN: Display-delay countdown for interactive terminals
//
// CountdownSleeper is the CLI's Sleeper. On a terminal it shows an indicatif
// bar counting down to the next frame; otherwise it just sleeps. Either way
// it returns only once the full delay has passed.

use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use slowmovie_core::{Sleeper, expand_seconds};

const TICK: Duration = Duration::from_secs(1);

/// Sleeper that optionally renders a countdown bar on stderr.
#[derive(Debug, Clone, Copy)]
pub struct CountdownSleeper {
    interactive: bool,
}

impl CountdownSleeper {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Countdown only when stderr is a terminal.
    pub fn for_stderr() -> Self {
        Self::new(console::Term::stderr().is_term())
    }

    fn countdown_bar(total: Duration) -> ProgressBar {
        let pb = ProgressBar::new(total.as_secs());
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} next frame in {msg} [{bar:40.cyan/blue}]",
        ) {
            pb.set_style(style.progress_chars("=> "));
        }
        pb
    }
}

impl Sleeper for CountdownSleeper {
    fn sleep(&self, duration: Duration) {
        if !self.interactive {
            thread::sleep(duration);
            return;
        }

        let pb = Self::countdown_bar(duration);
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            pb.set_position(duration.saturating_sub(remaining).as_secs());
            pb.set_message(expand_seconds(remaining.as_secs_f64().ceil() as u64));
            thread::sleep(remaining.min(TICK));
        }
        pb.finish_and_clear();
    }
}

//! Core library for the slow movie player.
//!
//! A slow movie player shows one still frame of a film at a time, holding
//! each frame on screen for minutes instead of milliseconds. This crate
//! validates the run configuration, formats durations, and drives ffprobe,
//! ffmpeg, ImageMagick and an optional image viewer through the frame loop.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use slowmovie_core::{Player, PlayerConfigBuilder};
//!
//! let config = PlayerConfigBuilder::new()
//!     .movie_filename("/movies/metropolis.mkv")
//!     .frame_interval("10")
//!     .time_delay("300")
//!     .build()
//!     .unwrap();
//!
//! let summary = Player::new(config).run().unwrap();
//! println!("showed {} frames", summary.frames_shown);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod playback;
pub mod util;
pub mod utils;

// Re-exports for public API
pub use config::{PlayerConfig, PlayerConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use playback::{FrameSchedule, PlaybackPlan, PlaybackState, PlaybackSummary, Player, Sleeper, ThreadSleeper};
pub use utils::{expand_seconds, render_days_hours_mins_seconds, render_hms, round_to_seconds, slow_runtime};

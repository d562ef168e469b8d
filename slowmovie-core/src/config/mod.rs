//! Configuration structures and constants for the slowmovie-core library.
//!
//! A [`PlayerConfig`] is created once, through [`PlayerConfigBuilder`], and is
//! never mutated afterwards. The builder is where all argument validation
//! happens, so a `PlayerConfig` in hand is always runnable.

mod builder;

use std::path::{Path, PathBuf};

pub use builder::PlayerConfigBuilder;

// Default constants

/// Default spacing, in seconds of movie time, between extracted frames.
pub const DEFAULT_FRAME_INTERVAL: u64 = 1;

/// Default number of wall-clock seconds each frame stays on screen.
pub const DEFAULT_FRAME_DISPLAY_DELAY: u64 = 300;

/// Well-known filename of the extracted frame, relative to the work directory.
pub const FRAME_IMAGE_NAME: &str = "slowmovie_frame.jpg";

/// Well-known filename of the annotated frame before it replaces the original.
pub const OVERLAY_IMAGE_NAME: &str = "slowmovie_frame_overlay.jpg";

/// ImageMagick program used to stamp the seek time onto frames.
pub const DEFAULT_ANNOTATOR_PROGRAM: &str = "convert";

/// Resolved, validated settings for one playback run.
///
/// # Examples
///
/// ```rust,no_run
/// use slowmovie_core::config::PlayerConfigBuilder;
///
/// let config = PlayerConfigBuilder::new()
///     .movie_filename("/movies/metropolis.mkv")
///     .frame_interval("10")
///     .time_delay("120")
///     .overlay_frame_num(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.frame_interval, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Movie to play. Known to be an existing regular file at build time.
    pub movie_filename: PathBuf,

    /// Seconds of movie time between extracted frames. Always > 0.
    pub frame_interval: u64,

    /// Seconds each frame is displayed. Always > 0.
    pub frame_display_delay: u64,

    /// Stamp the seek time onto each frame before display.
    pub overlay_frame_num: bool,

    /// Directory holding the intermediate frame images.
    pub work_dir: PathBuf,

    /// External image viewer program; `None` disables display.
    pub viewer: Option<String>,

    /// Program used for the overlay step.
    pub annotator_program: String,
}

impl PlayerConfig {
    /// Path of the extracted frame image.
    pub fn frame_image_path(&self) -> PathBuf {
        self.work_dir.join(FRAME_IMAGE_NAME)
    }

    /// Path of the annotated frame image.
    pub fn overlay_image_path(&self) -> PathBuf {
        self.work_dir.join(OVERLAY_IMAGE_NAME)
    }

    /// Display name of the movie (its file name, or the full path if it has none).
    pub fn movie_name(&self) -> String {
        display_name(&self.movie_filename)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// slowmovie-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Parse-and-Validate Builder for PlayerConfig
//
// The builder accepts values the way they arrive from the command line (the
// timing values as raw strings) and turns them into a PlayerConfig in one
// step. Validation runs in a fixed order and stops at the first failure:
//
//   1. movie filename is non-empty
//   2. movie filename names an existing regular file
//   3. time delay is a non-negative integer literal, and > 0
//   4. frame interval is a non-negative integer literal, and > 0

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::PlayerConfig;
use crate::error::{CoreError, CoreResult};

/// Builder for creating [`PlayerConfig`] instances.
///
/// ```rust
/// use slowmovie_core::config::PlayerConfigBuilder;
///
/// // No movie given: rejected before anything touches the disk.
/// let err = PlayerConfigBuilder::new().time_delay("60").build().unwrap_err();
/// assert!(err.to_string().contains("movie filename"));
/// ```
#[derive(Debug, Clone)]
pub struct PlayerConfigBuilder {
    // Required fields
    movie_filename: Option<PathBuf>,

    // Raw timing values, validated in build()
    time_delay: Option<String>,
    frame_interval: Option<String>,

    // Optional fields with defaults
    overlay_frame_num: bool,
    work_dir: PathBuf,
    viewer: Option<String>,
    annotator_program: String,
}

impl Default for PlayerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerConfigBuilder {
    /// Creates a new builder with the default timing and no movie.
    pub fn new() -> Self {
        Self {
            movie_filename: None,
            time_delay: None,
            frame_interval: None,
            overlay_frame_num: false,
            work_dir: PathBuf::from("."),
            viewer: None,
            annotator_program: super::DEFAULT_ANNOTATOR_PROGRAM.to_string(),
        }
    }

    /// Sets the movie to play.
    pub fn movie_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.movie_filename = Some(path.into());
        self
    }

    /// Sets the per-frame display delay from its raw command-line form.
    pub fn time_delay(mut self, raw: impl Into<String>) -> Self {
        self.time_delay = Some(raw.into());
        self
    }

    /// Sets the frame interval from its raw command-line form.
    pub fn frame_interval(mut self, raw: impl Into<String>) -> Self {
        self.frame_interval = Some(raw.into());
        self
    }

    pub fn overlay_frame_num(mut self, enabled: bool) -> Self {
        self.overlay_frame_num = enabled;
        self
    }

    /// Sets the directory for the intermediate frame images.
    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Sets the external image viewer. `None` keeps display disabled.
    pub fn viewer(mut self, program: Option<String>) -> Self {
        self.viewer = program.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn annotator_program(mut self, program: impl Into<String>) -> Self {
        self.annotator_program = program.into();
        self
    }

    /// Validates the collected values and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] describing the first failed check.
    pub fn build(self) -> CoreResult<PlayerConfig> {
        let movie_filename = self
            .movie_filename
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| {
                CoreError::InvalidConfig(
                    "A movie filename is required (-m/--movie_filename)".to_string(),
                )
            })?;

        if !movie_filename.is_file() {
            return Err(CoreError::InvalidConfig(format!(
                "Movie file '{}' does not exist or is not a regular file",
                movie_filename.display()
            )));
        }

        let frame_display_delay = match self.time_delay {
            Some(raw) => parse_seconds("time delay", &raw)?,
            None => super::DEFAULT_FRAME_DISPLAY_DELAY,
        };

        let frame_interval = match self.frame_interval {
            Some(raw) => parse_seconds("frame interval", &raw)?,
            None => super::DEFAULT_FRAME_INTERVAL,
        };

        log::debug!(
            "Validated configuration: movie={}, interval={}s, delay={}s, overlay={}",
            movie_filename.display(),
            frame_interval,
            frame_display_delay,
            self.overlay_frame_num
        );

        Ok(PlayerConfig {
            movie_filename,
            frame_interval,
            frame_display_delay,
            overlay_frame_num: self.overlay_frame_num,
            work_dir: self.work_dir,
            viewer: self.viewer,
            annotator_program: self.annotator_program,
        })
    }
}

/// Parses a strictly-digit seconds value that must be greater than zero.
fn parse_seconds(field: &str, raw: &str) -> CoreResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidConfig(format!(
            "The {field} must be a whole number of seconds, got '{raw}'"
        )));
    }

    let value = raw.parse::<u64>().map_err(|_| {
        CoreError::InvalidConfig(format!("The {field} '{raw}' is too large"))
    })?;

    if value == 0 {
        return Err(CoreError::InvalidConfig(format!(
            "The {field} must be greater than zero"
        )));
    }

    Ok(value)
}

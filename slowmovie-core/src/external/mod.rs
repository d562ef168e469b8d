// ============================================================================
// slowmovie-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interfaces to the Media Programs the Player Drives
//
// The player never decodes or renders anything itself. Probing, frame
// extraction, annotation and display are all delegated to external programs
// through the four traits below, so the playback loop can be run against
// fakes in tests.
//
// KEY COMPONENTS:
// - MediaProber / FfprobeProber: movie duration via the ffprobe crate
// - FrameExtractor / SidecarExtractor: single-frame grabs via ffmpeg-sidecar
// - FrameAnnotator / MagickAnnotator: seek-time overlay via ImageMagick
// - FrameViewer / CommandViewer / NoopViewer: display, off by default
// - check_dependency: "-version" probe for a required program

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// ImageMagick-based frame annotation
pub mod annotator;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// ffprobe-based duration probing
pub mod ffprobe_executor;

/// Image viewer invocation
pub mod viewer;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use annotator::MagickAnnotator;
pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegSpawner, GrabOutcome, SidecarExtractor, SidecarProcess, SidecarSpawner,
};
pub use ffprobe_executor::FfprobeProber;
pub use viewer::{CommandViewer, NoopViewer};

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// Reports the duration of a movie file.
pub trait MediaProber {
    /// Duration of the movie in (possibly fractional) seconds.
    fn duration_secs(&self, movie: &Path) -> CoreResult<f64>;

    /// External program this prober needs on `PATH`, if any.
    fn required_program(&self) -> Option<&str> {
        None
    }
}

/// Writes one still image of a movie at a seek position.
pub trait FrameExtractor {
    /// Extracts the frame at `seek_time` (`HH:MM:SS`) into `output`.
    fn extract_frame(&self, movie: &Path, seek_time: &str, output: &Path) -> CoreResult<()>;

    fn required_program(&self) -> Option<&str> {
        None
    }
}

/// Burns a line of text into an image.
pub trait FrameAnnotator {
    /// Reads `input`, writes the annotated copy to `output`.
    fn annotate(&self, input: &Path, text: &str, output: &Path) -> CoreResult<()>;

    fn required_program(&self) -> Option<&str> {
        None
    }
}

/// Shows an image to the user. Fire-and-forget.
pub trait FrameViewer {
    fn show(&self, image: &Path) -> CoreResult<()>;

    fn required_program(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external program can be started.
///
/// Runs `<cmd_name> -version` with output discarded. Only a failure to launch
/// counts; the exit status is ignored since some tools reject `-version`.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` if the program is not on `PATH`
/// * `CoreError::CommandStart` if it exists but cannot be started
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_missing_program() {
        let err = check_dependency("slowmovie-definitely-not-a-real-program").unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(name) if name.starts_with("slowmovie-")));
    }
}

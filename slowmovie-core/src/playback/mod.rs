// ============================================================================
// slowmovie-core/src/playback/mod.rs
// ============================================================================
//
// PLAYBACK: The Slow Movie Loop
//
// A run moves through these states, strictly one after another:
//
//   Init -> Probing -> Looping(t) -> Extracting -> [Overlaying] -> Displaying
//        -> Sleeping -> Looping(t + interval) ... -> Done
//
// Every collaborator failure ends the run. Removing a stale intermediate
// image is the one step whose failure is ignored.

mod schedule;
mod sleeper;

pub use schedule::FrameSchedule;
pub use sleeper::{Sleeper, ThreadSleeper};

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};

use crate::config::PlayerConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{
    CommandViewer, FfprobeProber, FrameAnnotator, FrameExtractor, FrameViewer, MagickAnnotator,
    MediaProber, NoopViewer, SidecarExtractor, check_dependency,
};
use crate::utils::{expand_seconds, render_days_hours_mins_seconds, round_to_seconds, slow_runtime};

/// Step of the playback loop, logged at debug level on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Init,
    Probing,
    Looping(u64),
    Extracting,
    Overlaying,
    Displaying,
    Sleeping,
    Done,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => f.write_str("init"),
            Self::Probing => f.write_str("probing"),
            Self::Looping(t) => write!(f, "looping (frame at {}s)", t),
            Self::Extracting => f.write_str("extracting"),
            Self::Overlaying => f.write_str("overlaying"),
            Self::Displaying => f.write_str("displaying"),
            Self::Sleeping => f.write_str("sleeping"),
            Self::Done => f.write_str("done"),
        }
    }
}

/// Timing facts known once the movie has been probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackPlan {
    /// Movie duration, rounded to whole seconds.
    pub runtime: u64,
    /// Wall-clock seconds the full slowed playback takes.
    pub slow_runtime: u64,
    /// Number of frames the loop will extract.
    pub frame_count: u64,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    pub runtime: u64,
    pub slow_runtime: u64,
    pub frames_shown: u64,
}

/// Drives one slow-movie run against a set of collaborators.
///
/// [`Player::new`] wires up the real tools (ffprobe, ffmpeg, ImageMagick and
/// the configured viewer); the `with_*` methods replace any of them.
pub struct Player {
    config: PlayerConfig,
    prober: Box<dyn MediaProber>,
    extractor: Box<dyn FrameExtractor>,
    annotator: Box<dyn FrameAnnotator>,
    viewer: Box<dyn FrameViewer>,
    sleeper: Box<dyn Sleeper>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        let viewer: Box<dyn FrameViewer> = match &config.viewer {
            Some(program) => Box::new(CommandViewer::new(program.clone())),
            None => Box::new(NoopViewer),
        };

        Self {
            prober: Box::new(FfprobeProber::new()),
            extractor: Box::new(SidecarExtractor::new()),
            annotator: Box::new(MagickAnnotator::new(config.annotator_program.clone())),
            viewer,
            sleeper: Box::new(ThreadSleeper),
            config,
        }
    }

    pub fn with_prober(mut self, prober: impl MediaProber + 'static) -> Self {
        self.prober = Box::new(prober);
        self
    }

    pub fn with_extractor(mut self, extractor: impl FrameExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    pub fn with_annotator(mut self, annotator: impl FrameAnnotator + 'static) -> Self {
        self.annotator = Box::new(annotator);
        self
    }

    pub fn with_viewer(mut self, viewer: impl FrameViewer + 'static) -> Self {
        self.viewer = Box::new(viewer);
        self
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Probes then plays. Equivalent to `prepare` followed by `play`.
    pub fn run(&self) -> CoreResult<PlaybackSummary> {
        let plan = self.prepare()?;
        self.play(&plan)
    }

    /// Checks the external programs are present and probes the movie.
    pub fn prepare(&self) -> CoreResult<PlaybackPlan> {
        self.enter(PlaybackState::Init);
        self.check_dependencies()?;

        self.enter(PlaybackState::Probing);
        let raw = self.prober.duration_secs(&self.config.movie_filename)?;
        let runtime = round_to_seconds(raw).ok_or_else(|| {
            CoreError::ProbeParse(format!("prober returned an invalid duration ({raw})"))
        })?;
        debug!("Probed duration {}s, rounded to {}s", raw, runtime);

        let plan = PlaybackPlan {
            runtime,
            slow_runtime: slow_runtime(
                runtime,
                self.config.frame_interval,
                self.config.frame_display_delay,
            ),
            frame_count: FrameSchedule::new(runtime, self.config.frame_interval).frame_count(),
        };

        info!("Normal runtime: {}", describe_duration(plan.runtime));
        info!("Slow runtime: {}", describe_duration(plan.slow_runtime));
        debug!("{} frame(s) scheduled", plan.frame_count);

        Ok(plan)
    }

    /// Runs the frame loop for a prepared plan.
    pub fn play(&self, plan: &PlaybackPlan) -> CoreResult<PlaybackSummary> {
        fs::create_dir_all(&self.config.work_dir).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create work directory '{}': {}",
                self.config.work_dir.display(),
                e
            ))
        })?;

        let delay = Duration::from_secs(self.config.frame_display_delay);
        let mut frames_shown = 0;

        for (index, current_frame) in
            FrameSchedule::new(plan.runtime, self.config.frame_interval).enumerate()
        {
            self.enter(PlaybackState::Looping(current_frame));
            self.show_frame(current_frame, index as u64 + 1, plan.frame_count)?;
            frames_shown += 1;

            self.enter(PlaybackState::Sleeping);
            self.sleeper.sleep(delay);
        }

        self.enter(PlaybackState::Done);

        Ok(PlaybackSummary {
            runtime: plan.runtime,
            slow_runtime: plan.slow_runtime,
            frames_shown,
        })
    }

    /// Verifies every program this run will launch.
    pub fn check_dependencies(&self) -> CoreResult<()> {
        let mut programs = vec![
            self.prober.required_program(),
            self.extractor.required_program(),
        ];
        if self.config.overlay_frame_num {
            programs.push(self.annotator.required_program());
        }
        programs.push(self.viewer.required_program());

        for program in programs.into_iter().flatten() {
            check_dependency(program)?;
        }
        debug!("External dependency check passed.");
        Ok(())
    }

    /// Extracts, optionally annotates, and displays one frame.
    ///
    /// An extractor that reports success without writing the image is treated
    /// as a failed extraction.
    fn show_frame(&self, current_frame: u64, number: u64, total: u64) -> CoreResult<()> {
        let seek_time = expand_seconds(current_frame);
        let frame = self.config.frame_image_path();

        self.enter(PlaybackState::Extracting);
        remove_stale(&frame);
        self.extractor
            .extract_frame(&self.config.movie_filename, &seek_time, &frame)?;

        if !frame.is_file() {
            return Err(CoreError::OperationFailed(format!(
                "Frame extraction at {} produced no image at '{}'",
                seek_time,
                frame.display()
            )));
        }

        if self.config.overlay_frame_num {
            self.enter(PlaybackState::Overlaying);
            let overlay = self.config.overlay_image_path();
            remove_stale(&overlay);
            self.annotator.annotate(&frame, &seek_time, &overlay)?;
            fs::rename(&overlay, &frame)?;
        }

        self.enter(PlaybackState::Displaying);
        self.viewer.show(&frame)?;
        info!("Showing frame {}/{} at {}", number, total, seek_time);

        Ok(())
    }

    fn enter(&self, state: PlaybackState) {
        debug!("State: {}", state);
    }
}

/// Day-level rendering for log lines; zero renders as "0 seconds" rather than nothing.
fn describe_duration(seconds: u64) -> String {
    let rendered = render_days_hours_mins_seconds(seconds);
    if rendered.is_empty() {
        "0 seconds".to_string()
    } else {
        rendered
    }
}

/// Removes a leftover intermediate image. Failures are ignored.
fn remove_stale(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!("Removed stale {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => debug!("Could not remove {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_duration() {
        assert_eq!(describe_duration(0), "0 seconds");
        assert_eq!(describe_duration(3900), "1 hour, 5 minutes");
    }

    #[test]
    fn test_remove_stale_ignores_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        remove_stale(&dir.path().join("never_existed.jpg"));
    }

    #[test]
    fn test_remove_stale_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        fs::write(&path, b"old").unwrap();
        remove_stale(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PlaybackState::Looping(30).to_string(), "looping (frame at 30s)");
        assert_eq!(PlaybackState::Done.to_string(), "done");
    }
}

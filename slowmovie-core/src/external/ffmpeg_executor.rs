// ============================================================================
// slowmovie-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Frame Extraction
//
// This module wraps ffmpeg-sidecar behind two small traits so the frame
// extractor can be exercised without a real ffmpeg binary.
//
// KEY COMPONENTS:
// - FfmpegProcess: a running grab, finished into an exit status plus diagnostics
// - FfmpegSpawner: starts a grab from a built command
// - SidecarSpawner / SidecarProcess: the ffmpeg-sidecar implementations
// - SidecarExtractor: FrameExtractor that grabs one frame per call

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::external::FrameExtractor;
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;
use std::process::ExitStatus;

/// How a finished ffmpeg grab ended.
#[derive(Debug)]
pub struct GrabOutcome {
    pub status: ExitStatus,
    /// Error and fatal lines ffmpeg logged, oldest first.
    pub diagnostics: Vec<String>,
}

/// A started ffmpeg grab.
pub trait FfmpegProcess {
    /// Drains ffmpeg's output and waits for it to exit.
    fn finish(self) -> CoreResult<GrabOutcome>;
}

/// Starts ffmpeg grabs.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Returns the text of an event worth reporting when a grab fails.
fn diagnostic_line(event: FfmpegEvent) -> Option<String> {
    match event {
        FfmpegEvent::Error(msg) | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, msg) => {
            Some(msg)
        }
        _ => None,
    }
}

/// `FfmpegProcess` backed by an `ffmpeg_sidecar` child.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn finish(mut self) -> CoreResult<GrabOutcome> {
        let events = self.0.iter().map_err(|e| {
            command_failed_error("ffmpeg (read output)", ExitStatus::default(), e.to_string())
        })?;
        let diagnostics: Vec<String> = events
            .filter_map(diagnostic_line)
            .inspect(|line| log::debug!("ffmpeg: {}", line))
            .collect();

        let status = self.0.wait().map_err(|e| command_wait_error("ffmpeg", e))?;
        Ok(GrabOutcome { status, diagnostics })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg", e))
    }
}

// --- Frame Extraction ---

/// [`FrameExtractor`] that runs `ffmpeg -ss <seek> -i <movie> -frames:v 1 <output>`.
#[derive(Debug, Clone, Default)]
pub struct SidecarExtractor<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
}

impl SidecarExtractor<SidecarSpawner> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: FfmpegSpawner> SidecarExtractor<S> {
    /// Creates an extractor using a custom spawner.
    pub fn with_spawner(spawner: S) -> Self {
        Self { spawner }
    }
}

/// Builds the single-frame extraction command.
///
/// `-ss` goes before `-i` so ffmpeg seeks on the input instead of decoding
/// everything up to the seek point.
pub(crate) fn build_extract_command(movie: &Path, seek_time: &str, output: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.arg("-hide_banner");
    cmd.arg("-ss");
    cmd.arg(seek_time);
    cmd.input(movie.to_string_lossy().as_ref());
    cmd.arg("-frames:v");
    cmd.arg("1");
    cmd.arg("-q:v");
    cmd.arg("2");
    cmd.arg("-y");
    cmd.output(output.to_string_lossy().as_ref());
    cmd
}

impl<S: FfmpegSpawner> FrameExtractor for SidecarExtractor<S> {
    fn extract_frame(&self, movie: &Path, seek_time: &str, output: &Path) -> CoreResult<()> {
        let cmd = build_extract_command(movie, seek_time, output);
        log::debug!("Running frame extraction command: {:?}", cmd);

        let outcome = self.spawner.spawn(cmd)?.finish()?;
        if !outcome.status.success() {
            log::error!("Frame extraction at {} failed: {}", seek_time, outcome.status);
            return Err(command_failed_error(
                "ffmpeg (frame extraction)",
                outcome.status,
                outcome.diagnostics.join("\n"),
            ));
        }

        log::debug!("Frame at {} extracted to {}", seek_time, output.display());
        Ok(())
    }

    fn required_program(&self) -> Option<&str> {
        Some("ffmpeg")
    }
}

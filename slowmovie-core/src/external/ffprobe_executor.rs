//! FFprobe integration for reading movie durations.
//!
//! Only the container-level `format.duration` field is used; stream
//! durations are ignored.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::MediaProber;
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// [`MediaProber`] backed by the `ffprobe` binary.
#[derive(Debug, Clone, Default)]
pub struct FfprobeProber;

impl FfprobeProber {
    pub fn new() -> Self {
        Self
    }
}

impl MediaProber for FfprobeProber {
    fn duration_secs(&self, movie: &Path) -> CoreResult<f64> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", movie.display());
        match ffprobe(movie) {
            Ok(metadata) => parse_duration(metadata.format.duration.as_deref()).map_err(|e| {
                log::error!("Unusable duration for {}: {}", movie.display(), e);
                e
            }),
            Err(err) => {
                log::error!("ffprobe failed for {}: {:?}", movie.display(), err);
                Err(map_ffprobe_error(err))
            }
        }
    }

    fn required_program(&self) -> Option<&str> {
        Some("ffprobe")
    }
}

/// Parses ffprobe's `format.duration` string ("129.633000") into seconds.
pub(crate) fn parse_duration(raw: Option<&str>) -> CoreResult<f64> {
    let raw = raw.ok_or_else(|| {
        CoreError::ProbeParse("ffprobe reported no duration".to_string())
    })?;

    let secs = raw.trim().parse::<f64>().map_err(|_| {
        CoreError::ProbeParse(format!("non-numeric duration '{raw}'"))
    })?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(CoreError::ProbeParse(format!("invalid duration '{raw}'")));
    }

    Ok(secs)
}

fn map_ffprobe_error(err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                CoreError::DependencyNotFound("ffprobe".to_string())
            } else {
                command_start_error("ffprobe", io_err)
            }
        }
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error("ffprobe", output.status, stderr.trim())
        }
        FfProbeError::Deserialize(err) => {
            CoreError::ProbeParse(format!("ffprobe output deserialization: {err}"))
        }
        _ => CoreError::ProbeParse(format!("unknown ffprobe error: {err:?}")),
    }
}

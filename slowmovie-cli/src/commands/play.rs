//! Implementation of the playback run.
//!
//! Turns parsed arguments into a validated PlayerConfig, prints the
//! configuration and timing banner, and hands control to slowmovie-core.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::logging::format_timestamp;
use crate::output::{print_config_summary, print_plan, print_summary};
use crate::progress::CountdownSleeper;

use chrono::{Local, TimeDelta};
use log::debug;
use slowmovie_core::{PlaybackSummary, Player, PlayerConfig, PlayerConfigBuilder};

/// Creates the PlayerConfig from CLI arguments. All validation happens here.
pub fn build_config(cli: &Cli) -> CliResult<PlayerConfig> {
    let mut builder = PlayerConfigBuilder::new()
        .overlay_frame_num(cli.overlay_frame_num)
        .viewer(cli.viewer.clone());

    if let Some(movie) = &cli.movie_filename {
        builder = builder.movie_filename(movie);
    }
    if let Some(delay) = &cli.time_delay {
        builder = builder.time_delay(delay);
    }
    if let Some(interval) = &cli.frame_interval {
        builder = builder.frame_interval(interval);
    }
    if let Some(dir) = &cli.work_dir {
        builder = builder.work_dir(dir);
    }

    builder.build()
}

/// Estimated wall-clock finish, or "unknown" if it is beyond chrono's range.
fn estimated_finish(slow_runtime: u64) -> String {
    let started = Local::now();
    i64::try_from(slow_runtime)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| started.checked_add_signed(delta))
        .map(|finish| format_timestamp(&finish))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Runs a full playback from parsed arguments.
pub fn run_play(cli: &Cli) -> CliResult<PlaybackSummary> {
    let config = build_config(cli)?;
    debug!("Resolved configuration: {:?}", config);
    print_config_summary(&config);

    let player = Player::new(config).with_sleeper(CountdownSleeper::for_stderr());

    let plan = player.prepare().cli_context("Could not start playback")?;
    print_plan(
        &plan,
        &format_timestamp(&Local::now()),
        &estimated_finish(plan.slow_runtime),
    );

    let summary = player.play(&plan).cli_context("Playback stopped")?;
    print_summary(&summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use slowmovie_core::CoreError;
    use tempfile::tempdir;

    #[test]
    fn test_build_config_from_args() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("film.mkv");
        std::fs::write(&movie, b"not really a movie").unwrap();

        let cli = Cli::parse_from([
            "slowmovie",
            "-m",
            movie.to_str().unwrap(),
            "-f",
            "10",
            "-t",
            "60",
            "-o",
            "--work-dir",
            dir.path().to_str().unwrap(),
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.movie_filename, movie);
        assert_eq!(config.frame_interval, 10);
        assert_eq!(config.frame_display_delay, 60);
        assert!(config.overlay_frame_num);
        assert_eq!(config.work_dir, dir.path());
    }

    #[test]
    fn test_build_config_requires_movie() {
        let cli = Cli::parse_from(["slowmovie", "-t", "60"]);
        assert!(matches!(build_config(&cli), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_build_config_rejects_empty_movie() {
        let cli = Cli::parse_from(["slowmovie", "-m", ""]);
        let err = build_config(&cli).unwrap_err();
        assert!(err.to_string().contains("movie filename is required"));
    }

    #[test]
    fn test_estimated_finish() {
        assert_ne!(estimated_finish(3900), "unknown");
        assert_eq!(estimated_finish(u64::MAX), "unknown");
    }
}

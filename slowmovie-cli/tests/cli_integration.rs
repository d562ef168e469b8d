use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// Helper function to get the path to the compiled binary
fn slowmovie_cmd() -> Command {
    let mut cmd = Command::cargo_bin("slowmovie").expect("Failed to find slowmovie binary");
    cmd.env_remove("SLOWMOVIE_VIEWER")
        .env_remove("SLOWMOVIE_WORK_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn dummy_movie(dir: &TempDir) -> Result<PathBuf, Box<dyn Error>> {
    let movie = dir.path().join("film.mkv");
    std::fs::write(&movie, "dummy content")?;
    Ok(movie)
}

#[test]
fn test_help_exits_successfully() {
    slowmovie_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--movie_filename"))
        .stdout(contains("--time_delay"))
        .stdout(contains("--frame_interval"))
        .stdout(contains("--overlay_frame_num"));
}

#[test]
fn test_help_ignores_other_validation() {
    slowmovie_cmd()
        .args(["-t", "not-a-number", "-h"])
        .assert()
        .success()
        .stdout(contains("Usage"));
}

#[test]
fn test_version_exits_successfully() {
    slowmovie_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_exits_one() {
    slowmovie_cmd()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(contains("--bogus"))
        .stderr(contains("--help"));
}

#[test]
fn test_missing_movie_exits_one() {
    slowmovie_cmd()
        .assert()
        .code(1)
        .stderr(contains("movie filename is required"));
}

#[test]
fn test_empty_movie_exits_one() {
    slowmovie_cmd()
        .args(["-m", ""])
        .assert()
        .code(1)
        .stderr(contains("movie filename is required"));
}

#[test]
fn test_non_existent_movie_exits_one() {
    slowmovie_cmd()
        .args(["-m", "surely/this/does/not/exist/film.mkv"])
        .assert()
        .code(1)
        .stderr(contains("does not exist"))
        .stderr(contains("Normal runtime").not())
        .stderr(contains("ffprobe").not())
        .stdout(contains("Movie:").not());
}

#[test]
fn test_zero_frame_interval_exits_one() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let movie = dummy_movie(&dir)?;

    slowmovie_cmd()
        .arg("-m")
        .arg(&movie)
        .args(["-f", "0"])
        .assert()
        .code(1)
        .stderr(contains("frame interval must be greater than zero"))
        .stdout(contains("Frames to show").not());

    Ok(())
}

#[test]
fn test_non_digit_time_delay_exits_one() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let movie = dummy_movie(&dir)?;

    slowmovie_cmd()
        .arg("-m")
        .arg(&movie)
        .args(["--time_delay", "5m"])
        .assert()
        .code(1)
        .stderr(contains("time delay must be a whole number"));

    Ok(())
}

#[test]
fn test_non_digit_frame_interval_exits_one() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let movie = dummy_movie(&dir)?;

    slowmovie_cmd()
        .arg("-m")
        .arg(&movie)
        .args(["--frame_interval", "1.5"])
        .assert()
        .code(1)
        .stderr(contains("frame interval must be a whole number"));

    Ok(())
}

#[test]
fn test_missing_ffprobe_is_fatal() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let movie = dummy_movie(&dir)?;
    let empty_path = tempdir()?;

    slowmovie_cmd()
        .env("PATH", empty_path.path())
        .arg("-m")
        .arg(&movie)
        .args(["-f", "10", "-t", "60", "-o"])
        .assert()
        .code(1)
        .stdout(contains("Movie: film.mkv"))
        .stdout(contains("Frame delay: 0 hours 1 minutes 0 seconds"))
        .stdout(contains("Overlay frame number: yes"))
        .stderr(contains("ffprobe"));

    Ok(())
}

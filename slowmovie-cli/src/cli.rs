// slowmovie-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.
//
// Flag spellings (underscored long names) are part of the tool's public
// interface. The timing values are kept as raw strings here; the core
// builder owns their validation so every failure reports the same way.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "slowmovie",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "SlowMovie: play a movie one still frame at a time",
    long_about = "Extracts a frame from a movie every FRAME_INTERVAL seconds of movie time \
                  using ffmpeg and shows each frame for TIME_DELAY seconds."
)]
pub struct Cli {
    /// Movie file to play
    // Kept as OsString: an empty value must reach the builder's check.
    #[arg(short = 'm', long = "movie_filename", value_name = "PATH")]
    pub movie_filename: Option<OsString>,

    /// Seconds each frame stays on screen [default: 300]
    #[arg(short = 't', long = "time_delay", value_name = "SECONDS")]
    pub time_delay: Option<String>,

    /// Seconds of movie time between frames [default: 1]
    #[arg(short = 'f', long = "frame_interval", value_name = "SECONDS")]
    pub frame_interval: Option<String>,

    /// Stamp the frame's timestamp onto the image (requires ImageMagick)
    #[arg(short = 'o', long = "overlay_frame_num")]
    pub overlay_frame_num: bool,

    /// Print a diagnostic line for every step
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Directory for the intermediate frame images [default: current directory]
    #[arg(long = "work-dir", value_name = "DIR", env = "SLOWMOVIE_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Image viewer to launch for each frame (display is off when unset)
    #[arg(long = "viewer", value_name = "PROGRAM", env = "SLOWMOVIE_VIEWER")]
    pub viewer: Option<String>,
}

//! Console output helpers for the run banner and summaries.

use std::fmt::Display;

use owo_colors::OwoColorize;
use slowmovie_core::{PlaybackPlan, PlaybackSummary, PlayerConfig, render_days_hours_mins_seconds, render_hms};

fn colors() -> bool {
    console::colors_enabled()
}

/// Print a heading with a separator line above and below
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    if colors() {
        println!("{}", line.bright_blue());
        println!("{}", text.bold());
        println!("{}", line.bright_blue());
    } else {
        println!("{line}");
        println!("{text}");
        println!("{line}");
    }
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    if colors() {
        println!("{}: {}", label.bright_cyan(), value);
    } else {
        println!("{label}: {value}");
    }
}

/// Print the fatal error line on stderr
pub fn print_error<T: Display>(err: T) {
    if console::colors_enabled_stderr() {
        eprintln!("{} {}", "Error:".red().bold(), err);
    } else {
        eprintln!("Error: {err}");
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Resolved configuration, shown before anything is probed.
pub fn print_config_summary(config: &PlayerConfig) {
    print_heading("SlowMovie");
    print_info("Movie", config.movie_name());
    print_info("Frame interval", format!("{} second(s)", config.frame_interval));
    print_info("Frame delay", render_hms(config.frame_display_delay));
    print_info("Overlay frame number", yes_no(config.overlay_frame_num));
    if let Some(viewer) = &config.viewer {
        print_info("Viewer", viewer);
    }
}

pub fn print_plan(plan: &PlaybackPlan, started: &str, finish: &str) {
    print_info("Frames to show", plan.frame_count);
    print_info("Playback started", started);
    print_info("Estimated finish", finish);
}

pub fn print_summary(summary: &PlaybackSummary) {
    print_heading("Playback finished");
    print_info("Frames shown", summary.frames_shown);
    let wall = render_days_hours_mins_seconds(summary.slow_runtime);
    if !wall.is_empty() {
        print_info("Slow runtime", wall);
    }
}

// ============================================================================
// slowmovie-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup and timestamp helpers
//
// USAGE:
// - default: info level, which prints per-frame progress lines
// - -d/--debug: debug level for the slowmovie crates, each line prefixed
// - RUST_LOG: overrides both, e.g. RUST_LOG=trace

use std::io::Write;

use chrono::{DateTime, Local};
use log::Level;

/// Filter used when RUST_LOG is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "info,slowmovie=debug,slowmovie_cli=debug,slowmovie_core=debug"
    } else {
        "info"
    }
}

/// Initializes env_logger. Info lines are printed bare; other levels get a "[LEVEL]" prefix.
pub fn init(debug: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter(debug)))
        .format(|buf, record| {
            if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();
}

/// Formats a timestamp for the run banner, e.g. "2024-06-01 12:30:45".
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

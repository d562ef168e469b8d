//! Blocking execution of plain (non-ffmpeg) external commands.

use std::process::{Command, Output, Stdio};

use log::{debug, error};

use crate::error::{CoreResult, command_failed_error, command_start_error};

/// Renders a command line for logging.
pub fn describe_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Executes a command to completion and returns its output.
///
/// `tool` names the command in errors (e.g. "convert (annotate)").
/// A non-zero exit is an error carrying the command's stderr.
pub fn run_command(cmd: &mut Command, tool: &str) -> CoreResult<Output> {
    debug!("Executing: {}", describe_command(cmd));

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            error!("Failed to execute {}: {}", tool, e);
            command_start_error(tool, e)
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!(
            "{} failed with exit code {}: {}",
            tool,
            output.status.code().unwrap_or(-1),
            stderr.trim()
        );
        return Err(command_failed_error(tool, output.status, stderr.trim()));
    }

    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_describe_command() {
        let mut cmd = Command::new("convert");
        cmd.args(["in.jpg", "-annotate", "+20+20", "00:00:05", "out.jpg"]);
        assert_eq!(
            describe_command(&cmd),
            "convert in.jpg -annotate +20+20 00:00:05 out.jpg"
        );
    }

    #[test]
    fn test_run_command_success() {
        let output = run_command(Command::new("sh").args(["-c", "echo hello"]), "sh").unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[test]
    fn test_run_command_nonzero_exit() {
        let err = run_command(
            Command::new("sh").args(["-c", "echo broken >&2; exit 3"]),
            "sh (test)",
        )
        .unwrap_err();
        match err {
            CoreError::CommandFailed { cmd, status, stderr } => {
                assert_eq!(cmd, "sh (test)");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_command_missing_program() {
        let err = run_command(&mut Command::new("slowmovie-no-such-tool"), "missing").unwrap_err();
        assert!(matches!(err, CoreError::CommandStart(..)));
    }
}

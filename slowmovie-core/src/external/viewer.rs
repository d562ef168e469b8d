//! Frame display.
//!
//! Display is disabled unless a viewer program is configured; the
//! [`NoopViewer`] stands in so the playback loop always has a viewer to call.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

use crate::error::{CoreResult, command_start_error};
use crate::external::FrameViewer;

/// Viewer that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewer;

impl FrameViewer for NoopViewer {
    fn show(&self, image: &Path) -> CoreResult<()> {
        log::debug!("Display disabled, not showing {}", image.display());
        Ok(())
    }
}

/// Viewer that launches `<program> <image>` and does not wait for it.
///
/// Each child is reaped on its own thread once it exits.
#[derive(Debug, Clone)]
pub struct CommandViewer {
    program: String,
}

impl CommandViewer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn reap_in_background(&self, mut child: Child) {
        let program = self.program.clone();
        let reaper = thread::Builder::new()
            .name("viewer-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    log::debug!("Viewer '{}' exited with {}", program, status);
                }
                Ok(_) => {}
                Err(e) => log::debug!("Failed waiting for viewer '{}': {}", program, e),
            });
        if let Err(e) = reaper {
            log::warn!("Could not start reaper thread for viewer '{}': {}", self.program, e);
        }
    }
}

impl FrameViewer for CommandViewer {
    fn show(&self, image: &Path) -> CoreResult<()> {
        let child = Command::new(&self.program)
            .arg(image)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| command_start_error(format!("{} (viewer)", self.program), e))?;
        log::debug!(
            "Launched viewer '{}' (pid {}) for {}",
            self.program,
            child.id(),
            image.display()
        );
        self.reap_in_background(child);
        Ok(())
    }

    fn required_program(&self) -> Option<&str> {
        Some(self.program.as_str())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_noop_viewer_never_fails() {
        assert!(NoopViewer.show(Path::new("does/not/exist.jpg")).is_ok());
        assert_eq!(NoopViewer.required_program(), None);
    }

    #[test]
    fn test_command_viewer_spawns() {
        let viewer = CommandViewer::new("true");
        assert!(viewer.show(Path::new("frame.jpg")).is_ok());
    }

    /// Viewer children of this process that have exited but were not reaped.
    #[cfg(target_os = "linux")]
    fn zombie_children(comm: &str) -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .flatten()
            .filter_map(|entry| std::fs::read_to_string(entry.path().join("stat")).ok())
            .filter(|stat| {
                // "pid (comm) state ppid ..."
                let Some((head, tail)) = stat.rsplit_once(')') else {
                    return false;
                };
                let name = head.split_once('(').map(|(_, n)| n).unwrap_or_default();
                let fields: Vec<&str> = tail.split_whitespace().collect();
                name == comm && fields.first() == Some(&"Z") && fields.get(1) == Some(&me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_command_viewer_reaps_children() {
        // `sleep 0` exits at once, so the image path doubles as its argument.
        let viewer = CommandViewer::new("sleep");
        for _ in 0..10 {
            viewer.show(Path::new("0")).unwrap();
        }
        // Let every child exit before looking for unreaped ones.
        thread::sleep(std::time::Duration::from_millis(500));

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut zombies = zombie_children("sleep");
        while zombies > 0 && std::time::Instant::now() < deadline {
            thread::sleep(std::time::Duration::from_millis(50));
            zombies = zombie_children("sleep");
        }
        assert_eq!(zombies, 0);
    }

    #[test]
    fn test_command_viewer_missing_program() {
        let viewer = CommandViewer::new("slowmovie-no-such-viewer");
        let err = viewer.show(Path::new("frame.jpg")).unwrap_err();
        assert!(matches!(err, CoreError::CommandStart(name, _) if name.contains("viewer")));
    }
}

//! Seek-time overlay using ImageMagick.

use std::path::Path;
use std::process::Command;

use crate::config::DEFAULT_ANNOTATOR_PROGRAM;
use crate::error::CoreResult;
use crate::external::FrameAnnotator;
use crate::util::run_command;

/// [`FrameAnnotator`] that shells out to ImageMagick's `convert`.
///
/// The text is drawn white on a translucent box in the bottom-right corner.
#[derive(Debug, Clone)]
pub struct MagickAnnotator {
    program: String,
}

impl Default for MagickAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_ANNOTATOR_PROGRAM)
    }
}

impl MagickAnnotator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub(crate) fn build_command(&self, input: &Path, text: &str, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(input)
            .args(["-gravity", "SouthEast"])
            .args(["-fill", "white"])
            .args(["-undercolor", "#00000080"])
            .args(["-pointsize", "36"])
            .args(["-annotate", "+20+20"])
            .arg(text)
            .arg(output);
        cmd
    }
}

impl FrameAnnotator for MagickAnnotator {
    fn annotate(&self, input: &Path, text: &str, output: &Path) -> CoreResult<()> {
        let mut cmd = self.build_command(input, text, output);
        run_command(&mut cmd, &format!("{} (annotate)", self.program))?;
        log::debug!("Annotated {} with '{}'", output.display(), text);
        Ok(())
    }

    fn required_program(&self) -> Option<&str> {
        Some(self.program.as_str())
    }
}

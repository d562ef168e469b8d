// slowmovie-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's tests and, via the "test-mocks" feature, for
// downstream tests. All mocks in one MockToolkit share a single journal so
// tests can assert on the exact order of external calls.

use super::{FrameAnnotator, FrameExtractor, FrameViewer, MediaProber};
use crate::error::{CoreError, CoreResult};
use crate::playback::Sleeper;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Probe(PathBuf),
    Extract { seek_time: String, output: PathBuf },
    Annotate { text: String, input: PathBuf, output: PathBuf },
    View(PathBuf),
    Sleep(Duration),
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct CallJournal(Rc<RefCell<Vec<ToolCall>>>);

impl CallJournal {
    fn record(&self, call: ToolCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<ToolCall> {
        self.0.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&ToolCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn seek_times(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ToolCall::Extract { seek_time, .. } => Some(seek_time.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Mock implementation of MediaProber returning a fixed duration or an error.
#[derive(Clone)]
pub struct MockProber {
    journal: CallJournal,
    duration: Rc<RefCell<Option<f64>>>,
}

impl MockProber {
    /// Sets the duration returned by subsequent probes.
    pub fn set_duration(&self, secs: f64) {
        *self.duration.borrow_mut() = Some(secs);
    }

    /// Makes subsequent probes fail.
    pub fn fail(&self) {
        *self.duration.borrow_mut() = None;
    }
}

impl MediaProber for MockProber {
    fn duration_secs(&self, movie: &Path) -> CoreResult<f64> {
        self.journal.record(ToolCall::Probe(movie.to_path_buf()));
        let duration = *self.duration.borrow();
        duration.ok_or_else(|| {
            CoreError::ProbeParse(format!("mock probe failure for {}", movie.display()))
        })
    }
}

/// Mock implementation of FrameExtractor. Writes a small dummy file as the frame.
#[derive(Clone)]
pub struct MockExtractor {
    journal: CallJournal,
    fail_at: Rc<RefCell<Option<String>>>,
    write_nothing: Rc<RefCell<bool>>,
}

impl MockExtractor {
    /// Makes the extraction at `seek_time` fail.
    pub fn fail_at(&self, seek_time: &str) {
        *self.fail_at.borrow_mut() = Some(seek_time.to_string());
    }

    /// Makes every extraction report success without writing an image.
    pub fn write_nothing(&self) {
        *self.write_nothing.borrow_mut() = true;
    }
}

impl FrameExtractor for MockExtractor {
    fn extract_frame(&self, _movie: &Path, seek_time: &str, output: &Path) -> CoreResult<()> {
        self.journal.record(ToolCall::Extract {
            seek_time: seek_time.to_string(),
            output: output.to_path_buf(),
        });
        if self.fail_at.borrow().as_deref() == Some(seek_time) {
            return Err(CoreError::OperationFailed(format!(
                "mock extraction failure at {seek_time}"
            )));
        }
        if !*self.write_nothing.borrow() {
            std::fs::write(output, format!("frame {seek_time}"))?;
        }
        Ok(())
    }
}

/// Mock implementation of FrameAnnotator. Copies the input and appends the text.
#[derive(Clone)]
pub struct MockAnnotator {
    journal: CallJournal,
}

impl FrameAnnotator for MockAnnotator {
    fn annotate(&self, input: &Path, text: &str, output: &Path) -> CoreResult<()> {
        self.journal.record(ToolCall::Annotate {
            text: text.to_string(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
        let original = std::fs::read_to_string(input)?;
        std::fs::write(output, format!("{original} [{text}]"))?;
        Ok(())
    }
}

/// Mock implementation of FrameViewer. Records what it was asked to show.
#[derive(Clone)]
pub struct MockViewer {
    journal: CallJournal,
    shown: Rc<RefCell<Vec<String>>>,
}

impl MockViewer {
    /// Contents of each image at the moment it was shown.
    pub fn shown_contents(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl FrameViewer for MockViewer {
    fn show(&self, image: &Path) -> CoreResult<()> {
        self.journal.record(ToolCall::View(image.to_path_buf()));
        let contents = std::fs::read_to_string(image).unwrap_or_default();
        self.shown.borrow_mut().push(contents);
        Ok(())
    }
}

/// Sleeper that returns immediately and records the requested duration.
#[derive(Clone)]
pub struct RecordingSleeper {
    journal: CallJournal,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.journal.record(ToolCall::Sleep(duration));
    }
}

/// A full set of mocks sharing one journal.
#[derive(Clone)]
pub struct MockToolkit {
    pub journal: CallJournal,
    pub prober: MockProber,
    pub extractor: MockExtractor,
    pub annotator: MockAnnotator,
    pub viewer: MockViewer,
    pub sleeper: RecordingSleeper,
}

impl MockToolkit {
    /// Creates mocks for a movie of `duration_secs` seconds.
    pub fn new(duration_secs: f64) -> Self {
        let journal = CallJournal::default();
        Self {
            prober: MockProber {
                journal: journal.clone(),
                duration: Rc::new(RefCell::new(Some(duration_secs))),
            },
            extractor: MockExtractor {
                journal: journal.clone(),
                fail_at: Rc::default(),
                write_nothing: Rc::default(),
            },
            annotator: MockAnnotator {
                journal: journal.clone(),
            },
            viewer: MockViewer {
                journal: journal.clone(),
                shown: Rc::default(),
            },
            sleeper: RecordingSleeper {
                journal: journal.clone(),
            },
            journal,
        }
    }
}

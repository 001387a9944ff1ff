use crate::ext::PathExt;
use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
    time::Duration,
};

/// Outcome of one run over a directory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    root: PathBuf,
    processed: Vec<PathBuf>,
    failed: Vec<PathBuf>,
    elapsed: Duration,
}

impl RunSummary {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            processed: Vec::new(),
            failed: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Files are kept in the order they are recorded.
    pub fn record<P: AsRef<Path>>(&mut self, path: P, succeeded: bool) {
        let path = path.as_ref().to_path_buf();
        if succeeded {
            self.processed.push(path);
        } else {
            self.failed.push(path);
        }
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub fn processed(&self) -> &[PathBuf] {
        &self.processed
    }

    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty() && self.failed.is_empty()
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Summary ===")?;
        writeln!(f, "Successfully processed: {} files", self.processed.len())?;
        writeln!(f, "Finished processing in {:?} \n", self.elapsed)?;

        if !self.processed.is_empty() {
            writeln!(f, "\nProcessed files:")?;
            for file in &self.processed {
                writeln!(f, "  ✓ {}", file.display_relative_to(&self.root))?;
            }
        }

        if !self.failed.is_empty() {
            writeln!(f, "\nFailed to process: {} files", self.failed.len())?;
            for file in &self.failed {
                writeln!(f, "  ✗ {}", file.display_relative_to(&self.root))?;
            }
        }

        if self.is_empty() {
            writeln!(f, "No TypeScript files (.ts or .tsx) found in the directory.")?;
        }
        Ok(())
    }
}

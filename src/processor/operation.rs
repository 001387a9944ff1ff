use crate::ext::PathExt;
use bstr::BString;
use std::path::PathBuf;

/// What the processor decided to do with one TypeScript file.
#[derive(Debug, PartialEq)]
pub enum FileOperation {
    /// The marker is already present; the file stays as it is.
    Skip { target: PathBuf },
    /// Rewrite `target` with `lines`, which carry the marker at `index`.
    Insert { target: PathBuf, index: usize, lines: Vec<BString> },
}

impl FileOperation {
    /// Gets the status line printed once the operation has been carried out.
    pub fn get_message(&self) -> String {
        match self {
            FileOperation::Skip { target } => {
                format!("Skipping {} (already has @ts-nocheck)", target.file_name_lossy())
            }
            FileOperation::Insert { target, .. } => {
                format!("Added @ts-nocheck to: {}", target.file_name_lossy())
            }
        }
    }
}

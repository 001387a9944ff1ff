//! Read, decide, write: the per-file half of a run.

pub mod insertion;
pub mod operation;

pub use insertion::{has_marker, insert_marker, insertion_index};
pub use operation::FileOperation;

use crate::{
    error::Result,
    ioutils::{read_lines, write_lines},
};
use std::path::Path;

/// Reads `path` and decides whether the marker has to be added.
pub fn plan<P: AsRef<Path>>(path: P) -> Result<FileOperation> {
    let target = path.as_ref().to_path_buf();
    let lines = read_lines(&target)?;
    log::trace!("Read {} lines from {}", lines.len(), target.display());

    match insert_marker(&lines) {
        Some(updated) => {
            let index = insertion_index(&lines);
            Ok(FileOperation::Insert { target, index, lines: updated })
        }
        None => Ok(FileOperation::Skip { target }),
    }
}

/// Carries out a planned operation. Skips never touch the filesystem.
pub fn apply(operation: &FileOperation) -> Result<()> {
    match operation {
        FileOperation::Skip { .. } => Ok(()),
        FileOperation::Insert { target, index, lines } => {
            log::debug!("Inserting marker at line {} of {}", index + 1, target.display());
            write_lines(target, lines)
        }
    }
}

/// Processes one file and reports whether it ended up carrying the marker.
///
/// A status line is printed either way. Errors are not retried and nothing
/// is restored after a failed write.
pub fn process_file<P: AsRef<Path>>(path: P) -> bool {
    let outcome = plan(path).and_then(|operation| {
        apply(&operation)?;
        Ok(operation)
    });
    match outcome {
        Ok(operation) => {
            println!("{}", operation.get_message());
            true
        }
        Err(e) => {
            println!("{e}");
            log::debug!("{e:?}");
            false
        }
    }
}

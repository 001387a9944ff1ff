use crate::{
    constants::TARGET_EXTENSIONS,
    error::{Error, Result},
    ext::PathExt,
};
use std::path::Path;
use walkdir::WalkDir;

/// Whether the walker hands `path` to the file processor.
pub fn is_candidate(path: &Path) -> bool {
    path.lowercase_extension()
        .is_some_and(|extension| TARGET_EXTENSIONS.contains(&extension.as_str()))
}

/// Walks `root` recursively and calls `visit` for every candidate file.
///
/// Entries come in file-name order within each directory and symlinks are not
/// followed. An entry that cannot be read is reported and skipped; only a
/// failure at `root` itself aborts the walk.
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path),
{
    for dir_entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::WalkStart { root: root.to_path_buf(), source: e });
            }
            Err(e) => {
                let path = e.path().unwrap_or(root).display().to_string();
                println!("Error accessing path {path}: {e}");
                log::warn!("Skipping unreadable entry {path}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            log::trace!("Entering {}", entry.path().display());
            continue;
        }
        if is_candidate(entry.path()) {
            visit(entry.path());
        } else {
            log::trace!("Ignoring {}", entry.path().display());
        }
    }
    Ok(())
}

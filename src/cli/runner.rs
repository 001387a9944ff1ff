use crate::{
    cli::Args,
    error::{Error, Result},
    processor::process_file,
    summary::RunSummary,
    walker::walk,
};
use std::{path::Path, time::Instant};

/// Main entry point for CLI execution: processes the current working directory.
pub fn run(args: Args) -> Result<RunSummary> {
    log::debug!("Running with {args:?}");
    let root = std::env::current_dir().map_err(Error::CurrentDir)?;
    process_tree(&root)
}

/// Walks `root`, adds the marker to every TypeScript file and prints the summary.
///
/// Per-file failures end up in the summary; only a walk that cannot start is
/// returned as an error.
pub fn process_tree(root: &Path) -> Result<RunSummary> {
    let started = Instant::now();
    println!("Processing TypeScript files in: {}", root.display());

    let mut summary = RunSummary::new(root);
    walk(root, |path| {
        let succeeded = process_file(path);
        summary.record(path, succeeded);
    })?;
    summary.finish(started.elapsed());

    log::info!(
        "{} processed, {} failed in {:?}",
        summary.processed().len(),
        summary.failed().len(),
        summary.elapsed()
    );
    print!("{summary}");
    Ok(summary)
}

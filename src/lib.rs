//! Add a `@ts-nocheck` marker to every TypeScript file in a directory tree.
//!
//! The tree is walked recursively, every `.ts`/`.tsx` file (case-insensitive)
//! gets the marker line after its leading comment block unless it already has
//! it, and a summary of processed and failed files is printed at the end.

/// Handles argument parsing and the top-level run.
pub mod cli;

/// Fixed values: the marker, target extensions, exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// Line-oriented file reading and writing.
pub mod ioutils;

/// Per-file read, decide and rewrite.
pub mod processor;

/// Processed/failed bookkeeping and the final report.
pub mod summary;

/// Recursive directory traversal and extension filtering.
pub mod walker;

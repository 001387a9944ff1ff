//! Where the marker goes, and whether it is needed at all.
//!
//! Lines are inspected by prefix only. The scan does not track where a block
//! comment closes, so an interior line of a multi-line `/* ... */` comment
//! that does not itself start with `//` or `/*` is taken for code and the
//! marker lands inside the comment. A leading shebang is code as well.

use crate::constants::{BLOCK_COMMENT_PREFIX, LINE_COMMENT_PREFIX, MARKER_LINE};
use bstr::{BString, ByteSlice};

/// True when some line equals the marker once surrounding whitespace is trimmed.
pub fn has_marker<S: AsRef<[u8]>>(lines: &[S]) -> bool {
    lines.iter().any(|line| line.as_ref().trim() == MARKER_LINE.as_bytes())
}

fn is_leading_line(line: &[u8]) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with_str(LINE_COMMENT_PREFIX)
        || trimmed.starts_with_str(BLOCK_COMMENT_PREFIX)
}

/// Index just past the leading run of blank and comment lines.
pub fn insertion_index<S: AsRef<[u8]>>(lines: &[S]) -> usize {
    lines.iter().take_while(|line| is_leading_line(line.as_ref())).count()
}

/// Returns the lines with the marker inserted, or `None` if it is already there.
pub fn insert_marker(lines: &[BString]) -> Option<Vec<BString>> {
    if has_marker(lines) {
        return None;
    }
    let index = insertion_index(lines);
    let mut updated = Vec::with_capacity(lines.len() + 1);
    updated.extend_from_slice(&lines[..index]);
    updated.push(BString::from(MARKER_LINE));
    updated.extend_from_slice(&lines[index..]);
    Some(updated)
}

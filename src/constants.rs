//! Constants used throughout pleasenocheck

/// The comment line inserted into every TypeScript file.
pub const MARKER_LINE: &str =
    "// @ts-nocheck // ts-nocheck automatically added by pleasenocheck script";

/// File extensions (lower-case, without the dot) selected by the walker.
pub const TARGET_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Line prefixes treated as part of the leading comment block.
pub const LINE_COMMENT_PREFIX: &str = "//";
pub const BLOCK_COMMENT_PREFIX: &str = "/*";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

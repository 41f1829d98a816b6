//! svn-specific constants
//!
//! Centralized definitions for svn command names, flags, and special values.

/// svn command binary name
pub const SVN_COMMAND: &str = "svn";

/// svn subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const CAT: &str = "cat";
    pub const DIFF: &str = "diff";
    pub const INFO: &str = "info";
}

/// svn command flags
pub mod flags {
    /// Structured XML output (log only)
    pub const XML: &str = "--xml";
    /// Specify revision or revision range
    pub const REVISION: &str = "-r";
    /// One line per changed path instead of a full diff
    pub const SUMMARIZE: &str = "--summarize";
    /// Print a single item of `svn info`
    pub const SHOW_ITEM: &str = "--show-item";
}

/// Special svn values
pub mod special {
    /// Full history range, newest first
    pub const FULL_RANGE: &str = "HEAD:0";

    /// `svn info --show-item` key for the working-copy root
    pub const WC_ROOT: &str = "wc-root";

    /// Prefix of a revision label (`r42`)
    pub const REVISION_MARKER: char = 'r';

    /// Start of the display tail appended to a label (`r42 | date | msg`)
    pub const LABEL_TAIL: &str = " |";

    /// Separator between fields of a history display line
    pub const FIELD_SEPARATOR: &str = " | ";

    /// Output directory name used for the working-copy side
    pub const LOCAL_DIR: &str = "local";
}

/// Error detection patterns in svn output
pub mod errors {
    /// svn E155007: path is not a working copy
    pub const NOT_A_WORKING_COPY: &str = "is not a working copy";
}

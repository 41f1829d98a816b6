//! Change summary data model

/// How a file changed between two revisions (`svn diff --summarize`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was added
    Added,

    /// File was deleted
    Deleted,

    /// File content was modified
    Modified,

    /// Only svn properties changed
    PropertiesOnly,

    /// Nothing reported for the file
    Unchanged,

    /// Status code svn reported that has no dedicated kind
    Other(char),
}

impl ChangeKind {
    /// Map the first column of a summarize line to a change kind
    pub fn from_code(code: char) -> Self {
        match code {
            'A' => Self::Added,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            ' ' => Self::PropertiesOnly,
            other => Self::Other(other),
        }
    }

    /// Does the file content differ?
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Modified)
    }
}

//! Revision history data model

use chrono::{DateTime, FixedOffset};

use crate::svn::constants::special;

/// One entry of a tracked file's history, as reported by `svn log --xml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionDescriptor {
    /// Revision number
    pub revision: u64,

    /// Commit time, if the entry had a `<date>` element
    pub date: Option<DateTime<FixedOffset>>,

    /// Commit message, if the entry had non-empty `<msg>` text
    pub message: Option<String>,

    /// Display line built while parsing (`r12 | 2024-03-01 10:15 | message`)
    pub summary: String,
}

impl RevisionDescriptor {
    /// Label identifying this revision (`r12`)
    pub fn label(&self) -> String {
        format!("{}{}", special::REVISION_MARKER, self.revision)
    }

}

/// Format a timestamp as `YYYY-MM-DD HH:MM` in its own offset
pub fn format_minutes(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// One side of a comparison
///
/// Decided once from the user-supplied label; nothing downstream compares
/// label strings again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The uncommitted working-copy file
    Local,
    /// Committed content at a revision
    Versioned(u64),
}

impl Selection {
    /// Classify a label against the tracked file's name
    ///
    /// `label` may carry a display tail (`r12 | 2024-03-01 10:15 | msg`);
    /// everything from the first `" |"` on is ignored. Returns `None` when
    /// the revision part is not a revision number.
    pub fn from_label(label: &str, project_name: &str) -> Option<Self> {
        if label == project_name {
            return Some(Self::Local);
        }

        let head = label.split(special::LABEL_TAIL).next().unwrap_or(label);
        let number = head.strip_prefix(special::REVISION_MARKER)?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        number.parse().ok().map(Self::Versioned)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// Revision argument for svn queries (`12`), `None` for the working copy
    pub fn revision_arg(&self) -> Option<String> {
        match self {
            Self::Local => None,
            Self::Versioned(rev) => Some(rev.to_string()),
        }
    }

    /// Name of the output directory holding this side's artifact
    pub fn dir_name(&self) -> String {
        match self {
            Self::Local => special::LOCAL_DIR.to_string(),
            Self::Versioned(rev) => format!("{}{}", special::REVISION_MARKER, rev),
        }
    }

    /// Identifier reported back to the caller
    ///
    /// The working copy is reported under the tracked file's name.
    pub fn identifier(&self, project_name: &str) -> String {
        match self {
            Self::Local => project_name.to_string(),
            Self::Versioned(_) => self.dir_name(),
        }
    }
}

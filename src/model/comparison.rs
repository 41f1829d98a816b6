//! Comparison result data model
//!
//! Output of resolving two selections into extracted artifacts.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, NaiveTime};

use super::{ChangeKind, Selection};

/// Date and time of one side, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideTimestamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// UTC offset as printed by svn (`+0100`); `None` for local files
    pub utc_offset: Option<String>,
}

impl SideTimestamp {
    /// Timestamp of a working-copy file, in the local time zone
    pub fn from_local(time: DateTime<Local>) -> Self {
        let naive = time.naive_local();
        Self {
            date: naive.date(),
            time: naive.time(),
            utc_offset: None,
        }
    }

    /// `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM:SS`
    pub fn time_string(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for SideTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date_string(), self.time_string())
    }
}

/// One side of a finished comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub selection: Selection,

    /// `r12`, or the tracked file's name for the working copy
    pub identifier: String,

    /// Where the extracted copy was written
    pub output_file: PathBuf,

    pub timestamp: SideTimestamp,
}

/// Non-fatal finding reported alongside a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// svn reports no content change for the file between the two revisions
    NoChangeInFile {
        from: String,
        to: String,
        change: ChangeKind,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChangeInFile { from, to, change } => write!(
                f,
                "No difference in the board file between {} and {} ({:?})",
                from, to, change
            ),
        }
    }
}

/// Both sides of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub first: ResolvedArtifact,
    pub second: ResolvedArtifact,
    pub advisory: Option<Advisory>,
}

impl ComparisonResult {
    pub fn artifact1(&self) -> &str {
        &self.first.identifier
    }

    pub fn artifact2(&self) -> &str {
        &self.second.identifier
    }

    /// `date1 time1 date2 time2`
    pub fn timestamps(&self) -> String {
        format!("{} {}", self.first.timestamp, self.second.timestamp)
    }
}

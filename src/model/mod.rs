//! Data models for boardrev
//!
//! This module contains UI-independent data structures representing
//! svn history entries, comparison selections, and their results.

mod change_summary;
mod comparison;
mod revision;

pub use change_summary::ChangeKind;
pub use comparison::{Advisory, ComparisonResult, ResolvedArtifact, SideTimestamp};
pub use revision::{RevisionDescriptor, Selection, format_minutes};

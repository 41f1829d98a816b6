//! svn output parser
//!
//! Parses the output from svn commands into structured data.

mod history;
mod info;
mod revision;
mod summary;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for the timezone token of `svn log` plain-text headers
/// Format: `+HHMM` or `-HHMM`
/// Example: `r12 | alice | 2024-03-01 10:15:30 +0100 (Fri, 01 Mar 2024) | 1 line`
static UTC_OFFSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]\d{4}$").expect("Invalid UTC offset regex"));

/// Parser for svn command output
pub struct Parser;

//! Single revision metadata parser (svn log -r N)

use chrono::{NaiveDate, NaiveTime};

use super::super::SvnError;
use super::{Parser, UTC_OFFSET_REGEX};
use crate::model::SideTimestamp;

const HEADER_SEPARATOR: char = '|';

impl Parser {
    /// Parse the commit time out of plain-text `svn log -r <rev>` output
    ///
    /// Format:
    /// ```text
    /// ------------------------------------------------------------------------
    /// r12 | alice | 2024-03-01 10:15:30 +0100 (Fri, 01 Mar 2024) | 1 line
    /// ...
    /// ```
    ///
    /// Line 1 must have at least three `|` fields, and field 2 must start
    /// with date, time and UTC offset tokens.
    pub fn parse_revision_timestamp(output: &str) -> Result<SideTimestamp, SvnError> {
        let header = output.lines().nth(1).ok_or_else(|| {
            SvnError::ParseError(format!(
                "Expected a revision header on line 2 of svn log output, got {:?}",
                output
            ))
        })?;

        let fields: Vec<&str> = header.split(HEADER_SEPARATOR).collect();
        if fields.len() < 3 {
            return Err(SvnError::ParseError(format!(
                "Expected at least 3 fields in revision header, got {}: {:?}",
                fields.len(),
                header
            )));
        }

        let tokens: Vec<&str> = fields[2].split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(SvnError::ParseError(format!(
                "Expected date, time and timezone in {:?}",
                fields[2]
            )));
        }

        let date = NaiveDate::parse_from_str(tokens[0], "%Y-%m-%d").map_err(|e| {
            SvnError::ParseError(format!("Invalid commit date {:?}: {}", tokens[0], e))
        })?;
        let time = NaiveTime::parse_from_str(tokens[1], "%H:%M:%S").map_err(|e| {
            SvnError::ParseError(format!("Invalid commit time {:?}: {}", tokens[1], e))
        })?;
        if !UTC_OFFSET_REGEX.is_match(tokens[2]) {
            return Err(SvnError::ParseError(format!(
                "Invalid UTC offset {:?}",
                tokens[2]
            )));
        }

        Ok(SideTimestamp {
            date,
            time,
            utc_offset: Some(tokens[2].to_string()),
        })
    }
}

//! History parser (svn log --xml)
//!
//! The reply is consumed as a stream of start/end/text events. [`LogHandler`]
//! carries the little state needed between events and knows nothing about
//! the XML library driving it.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use quick_xml::Reader;
use quick_xml::events::Event;

use super::super::SvnError;
use super::super::constants::special;
use super::Parser;
use crate::model::{RevisionDescriptor, format_minutes};

const LOGENTRY: &[u8] = b"logentry";
const DATE: &[u8] = b"date";
const MSG: &[u8] = b"msg";
const REVISION_ATTR: &str = "revision";

impl Parser {
    /// Parse `svn log --xml` output into revision descriptors
    ///
    /// Entries are returned in document order (newest first for `HEAD:0`).
    /// Malformed or truncated XML and unparseable dates are errors; a
    /// well-formed `<log/>` with no entries is an empty list.
    pub fn parse_history_xml(xml: &str) -> Result<Vec<RevisionDescriptor>, SvnError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);

        let mut handler = LogHandler::default();
        let mut depth = 0usize;
        let mut seen_root = false;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(e) => {
                    depth += 1;
                    seen_root = true;
                    let revision = revision_attr(e.name().as_ref(), &e)?;
                    handler.start_element(e.name().as_ref(), revision.as_deref())?;
                }
                Event::Empty(e) => {
                    seen_root = true;
                    let revision = revision_attr(e.name().as_ref(), &e)?;
                    handler.start_element(e.name().as_ref(), revision.as_deref())?;
                    handler.end_element(e.name().as_ref());
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    handler.end_element(e.name().as_ref());
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(xml_error)?;
                    handler.characters(&text)?;
                }
                Event::CData(c) => {
                    let bytes = c.into_inner();
                    handler.characters(&String::from_utf8_lossy(&bytes))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(SvnError::ParseError(
                "svn log reply contains no XML element".to_string(),
            ));
        }
        if depth != 0 {
            return Err(SvnError::ParseError(format!(
                "svn log reply ended with {} unclosed element(s)",
                depth
            )));
        }

        Ok(handler.finish())
    }
}

/// Payload field being captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Msg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HandlerState {
    #[default]
    Idle,
    InsideEntry,
    Capturing(Field),
}

/// Entry under construction
#[derive(Debug)]
struct EntryBuilder {
    revision: u64,
    date: Option<DateTime<FixedOffset>>,
    message: Option<String>,
    line: String,
}

#[derive(Debug, Default)]
struct LogHandler {
    state: HandlerState,
    current: Option<EntryBuilder>,
    entries: Vec<RevisionDescriptor>,
}

impl LogHandler {
    fn start_element(&mut self, name: &[u8], revision: Option<&str>) -> Result<(), SvnError> {
        if name == LOGENTRY {
            let revision = revision.ok_or_else(|| {
                SvnError::ParseError("<logentry> without revision attribute".to_string())
            })?;
            let number = revision.trim().parse::<u64>().map_err(|_| {
                SvnError::ParseError(format!("Invalid revision attribute: {:?}", revision))
            })?;
            self.current = Some(EntryBuilder {
                revision: number,
                date: None,
                message: None,
                line: format!("{}{}", special::REVISION_MARKER, number),
            });
            self.state = HandlerState::InsideEntry;
            return Ok(());
        }

        let field = match name {
            DATE => Some(Field::Date),
            MSG => Some(Field::Msg),
            _ => None,
        };

        match (field, self.current.as_mut()) {
            (Some(field), Some(entry)) => {
                entry.line.push_str(special::FIELD_SEPARATOR);
                self.state = HandlerState::Capturing(field);
            }
            (None, Some(_)) => self.state = HandlerState::InsideEntry,
            (_, None) => self.state = HandlerState::Idle,
        }
        Ok(())
    }

    fn end_element(&mut self, name: &[u8]) {
        if name == LOGENTRY {
            if let Some(entry) = self.current.take() {
                self.entries.push(RevisionDescriptor {
                    revision: entry.revision,
                    date: entry.date,
                    message: entry.message,
                    summary: entry.line,
                });
            }
            self.state = HandlerState::Idle;
        } else if let HandlerState::Capturing(_) = self.state {
            self.state = HandlerState::InsideEntry;
        }
    }

    /// Only the first text chunk of a field is kept
    fn characters(&mut self, text: &str) -> Result<(), SvnError> {
        let HandlerState::Capturing(field) = self.state else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let Some(entry) = self.current.as_mut() else {
            return Ok(());
        };

        match field {
            Field::Date => {
                let date = parse_iso8601(text)?;
                entry.line.push_str(&format_minutes(&date));
                entry.date = Some(date);
            }
            Field::Msg => {
                entry.line.push_str(text);
                entry.message = Some(text.to_string());
            }
        }
        self.state = HandlerState::InsideEntry;
        Ok(())
    }

    fn finish(self) -> Vec<RevisionDescriptor> {
        self.entries
    }
}

/// Extended and reduced-precision forms with an offset (`Z` is rewritten to `+0000`)
const ISO8601_ZONED: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

const ISO8601_NAIVE: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp, keeping its offset (UTC when absent)
pub(super) fn parse_iso8601(text: &str) -> Result<DateTime<FixedOffset>, SvnError> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date);
    }

    let zoned = match text.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+0000"),
        None => text.to_string(),
    };
    for format in ISO8601_ZONED {
        if let Ok(date) = DateTime::parse_from_str(&zoned, format) {
            return Ok(date);
        }
    }
    for format in ISO8601_NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        && let Some(midnight) = day.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc().fixed_offset());
    }
    Err(SvnError::ParseError(format!(
        "Invalid ISO-8601 date: {:?}",
        text
    )))
}

fn revision_attr(
    name: &[u8],
    element: &quick_xml::events::BytesStart<'_>,
) -> Result<Option<String>, SvnError> {
    if name != LOGENTRY {
        return Ok(None);
    }
    let Some(attr) = element
        .try_get_attribute(REVISION_ATTR)
        .map_err(xml_error)?
    else {
        return Ok(None);
    };
    let value = attr.unescape_value().map_err(xml_error)?;
    Ok(Some(value.into_owned()))
}

fn xml_error(err: impl std::fmt::Display) -> SvnError {
    SvnError::ParseError(format!("Malformed svn log XML: {}", err))
}

//! Change summary parser (svn diff --summarize)

use tracing::warn;

use super::super::SvnError;
use super::Parser;
use crate::model::ChangeKind;

impl Parser {
    /// Parse `svn diff --summarize` output for a single file
    ///
    /// The first column of the first non-empty line is the change code:
    /// - "M       board.kicad_pcb" (modified)
    /// - "A       board.kicad_pcb" (added)
    /// - " M      board.kicad_pcb" (properties only)
    ///
    /// An empty reply means svn saw no change at all. Codes without a
    /// dedicated kind come back as [`ChangeKind::Other`].
    pub fn parse_change_summary(output: &str) -> Result<ChangeKind, SvnError> {
        let Some(line) = output.lines().find(|l| !l.trim().is_empty()) else {
            return Ok(ChangeKind::Unchanged);
        };

        let code = line.chars().next().unwrap_or(' ');
        let kind = ChangeKind::from_code(code);
        if let ChangeKind::Other(code) = kind {
            warn!(code = %code, line, "unrecognised change code");
        }
        Ok(kind)
    }
}

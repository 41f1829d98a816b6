//! Working-copy info parser (svn info --show-item)

use std::path::PathBuf;

use super::super::SvnError;
use super::Parser;

impl Parser {
    /// Parse `svn info --show-item wc-root` output into the root path
    pub fn parse_wc_root(output: &str) -> Result<PathBuf, SvnError> {
        let root = output.trim();
        if root.is_empty() {
            return Err(SvnError::ParseError(
                "svn info returned an empty working-copy root".to_string(),
            ));
        }
        Ok(PathBuf::from(root))
    }
}

//! Revision history of a tracked file

use std::path::Path;

use tracing::{info, warn};

use crate::model::RevisionDescriptor;
use crate::svn::parser::Parser;
use crate::svn::{CommandRunner, SvnError, SvnExecutor};

/// Reads the full history of one file through `svn log --xml`
#[derive(Debug, Clone)]
pub struct RevisionHistoryReader<'a, R> {
    executor: &'a SvnExecutor<R>,
}

impl<'a, R: CommandRunner> RevisionHistoryReader<'a, R> {
    pub fn new(executor: &'a SvnExecutor<R>) -> Self {
        Self { executor }
    }

    /// Fetch every revision touching `file_path`, newest first
    ///
    /// `file_path` is relative to `working_dir`. An empty history is
    /// returned as an empty list.
    pub fn fetch_history(
        &self,
        working_dir: &Path,
        file_path: &str,
    ) -> Result<Vec<RevisionDescriptor>, SvnError> {
        info!(file = file_path, "fetching revision history");
        let output = self.executor.log_xml_raw(working_dir, file_path)?;
        let entries = Parser::parse_history_xml(&output)?;

        if entries.is_empty() {
            warn!(file = file_path, "svn reported no history for file");
        }
        Ok(entries)
    }

    /// Labels to pick from: the working-copy entry, then one display line per revision
    pub fn list_artifacts(
        &self,
        working_dir: &Path,
        file_path: &str,
        board_file: &str,
    ) -> Result<Vec<String>, SvnError> {
        let history = self.fetch_history(working_dir, file_path)?;
        Ok(std::iter::once(board_file.to_string())
            .chain(history.into_iter().map(|entry| entry.summary))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;

    const LOG_ARGS: [&str; 5] = ["log", "--xml", "-r", "HEAD:0", "hw/board.kicad_pcb"];

    const LOG_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<log>
<logentry revision="5">
<author>alice</author>
<date>2024-03-02T08:00:00.000000Z</date>
<msg>Move connector</msg>
</logentry>
<logentry revision="2">
<author>alice</author>
<date>2024-03-01T10:15:30.000000Z</date>
<msg>Initial board</msg>
</logentry>
</log>
"#;

    #[test]
    fn test_fetch_history() {
        let executor = SvnExecutor::with_runner(ScriptedRunner::new().reply(&LOG_ARGS, LOG_XML));
        let reader = RevisionHistoryReader::new(&executor);

        let history = reader
            .fetch_history(Path::new("/wc"), "hw/board.kicad_pcb")
            .unwrap();
        let labels: Vec<String> = history.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["r5", "r2"]);
    }

    #[test]
    fn test_list_artifacts_prepends_working_copy() {
        let executor = SvnExecutor::with_runner(ScriptedRunner::new().reply(&LOG_ARGS, LOG_XML));
        let reader = RevisionHistoryReader::new(&executor);

        let artifacts = reader
            .list_artifacts(Path::new("/wc"), "hw/board.kicad_pcb", "board.kicad_pcb")
            .unwrap();
        assert_eq!(
            artifacts,
            vec![
                "board.kicad_pcb",
                "r5 | 2024-03-02 08:00 | Move connector",
                "r2 | 2024-03-01 10:15 | Initial board",
            ]
        );
    }

    #[test]
    fn test_fetch_history_empty() {
        let executor =
            SvnExecutor::with_runner(ScriptedRunner::new().reply(&LOG_ARGS, "<log>\n</log>\n"));
        let reader = RevisionHistoryReader::new(&executor);

        let history = reader
            .fetch_history(Path::new("/wc"), "hw/board.kicad_pcb")
            .unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_fetch_history_command_failure() {
        let runner = ScriptedRunner::new().fail(
            &LOG_ARGS,
            "svn: E155010: The node 'hw/board.kicad_pcb' was not found.",
            1,
        );
        let executor = SvnExecutor::with_runner(runner);
        let reader = RevisionHistoryReader::new(&executor);

        let err = reader
            .fetch_history(Path::new("/wc"), "hw/board.kicad_pcb")
            .unwrap_err();
        match err {
            SvnError::CommandFailed { stderr, .. } => assert!(stderr.contains("E155010")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_history_truncated_reply() {
        let truncated = &LOG_XML[..LOG_XML.len() / 2];
        let executor = SvnExecutor::with_runner(ScriptedRunner::new().reply(&LOG_ARGS, truncated));
        let reader = RevisionHistoryReader::new(&executor);

        assert!(matches!(
            reader.fetch_history(Path::new("/wc"), "hw/board.kicad_pcb"),
            Err(SvnError::ParseError(_))
        ));
    }
}

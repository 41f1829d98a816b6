//! Two-revision artifact resolution
//!
//! Turns two selections of a tracked board file into two extracted copies
//! under the output root, plus the time each copy was committed or last
//! modified:
//!
//! ```text
//! <output_dir>/<subpath>/r12/board.kicad_pcb     svn cat -r 12
//! <output_dir>/<subpath>/local/board.kicad_pcb   copy of the working file
//! ```
//!
//! Any failure aborts the comparison. Directories already written are left
//! in place; a re-run overwrites them.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::Config;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::model::{Advisory, ComparisonResult, ResolvedArtifact, Selection, SideTimestamp};
use crate::project::TrackedFile;
use crate::svn::parser::Parser;
use crate::svn::{CommandRunner, SvnError, SvnExecutor};

pub struct ArtifactResolver<'a, R, F = LocalFileSystem> {
    executor: &'a SvnExecutor<R>,
    fs: F,
    config: Config,
}

impl<'a, R: CommandRunner> ArtifactResolver<'a, R> {
    pub fn new(executor: &'a SvnExecutor<R>, config: Config) -> Self {
        Self::with_file_system(executor, LocalFileSystem, config)
    }
}

impl<'a, R: CommandRunner, F: FileSystem> ArtifactResolver<'a, R, F> {
    pub fn with_file_system(executor: &'a SvnExecutor<R>, fs: F, config: Config) -> Self {
        Self {
            executor,
            fs,
            config,
        }
    }

    /// Resolve two user-facing labels
    ///
    /// A label equal to the board file's name selects the working copy;
    /// anything else must be a revision label, optionally followed by its
    /// display tail (`r12 | 2024-03-01 10:15 | msg`).
    pub fn resolve_two_revisions(
        &self,
        label1: &str,
        label2: &str,
        file: &TrackedFile,
    ) -> Result<ComparisonResult, SvnError> {
        let first = classify(label1, &file.name)?;
        let second = classify(label2, &file.name)?;
        self.resolve(first, second, file)
    }

    /// Materialize both selections and collect their timestamps
    pub fn resolve(
        &self,
        first: Selection,
        second: Selection,
        file: &TrackedFile,
    ) -> Result<ComparisonResult, SvnError> {
        info!(
            file = %file.repo_path(),
            first = %first.identifier(&file.name),
            second = %second.identifier(&file.name),
            "resolving artifacts"
        );

        let advisory = match (first, second) {
            (Selection::Versioned(from), Selection::Versioned(to)) => {
                self.check_file_changed(from, to, file)?
            }
            _ => None,
        };

        let output_root = self.config.output_root(&file.working_dir);
        let first = self.resolve_side(first, file, &output_root)?;
        let second = self.resolve_side(second, file, &output_root)?;

        Ok(ComparisonResult {
            first,
            second,
            advisory,
        })
    }

    /// Warn when svn reports no content change between the two revisions
    fn check_file_changed(
        &self,
        from: u64,
        to: u64,
        file: &TrackedFile,
    ) -> Result<Option<Advisory>, SvnError> {
        let output = self.executor.diff_summarize_raw(
            &file.working_dir,
            &from.to_string(),
            &to.to_string(),
            &file.repo_path(),
        )?;
        let change = Parser::parse_change_summary(&output)?;
        if change.is_modified() {
            return Ok(None);
        }

        let advisory = Advisory::NoChangeInFile {
            from: Selection::Versioned(from).identifier(&file.name),
            to: Selection::Versioned(to).identifier(&file.name),
            change,
        };
        warn!("{}", advisory);
        Ok(Some(advisory))
    }

    fn resolve_side(
        &self,
        selection: Selection,
        file: &TrackedFile,
        output_root: &Path,
    ) -> Result<ResolvedArtifact, SvnError> {
        let dir = file.output_dir(output_root, &selection);
        self.fs.ensure_dir(&dir)?;
        let output_file = dir.join(&file.name);

        let timestamp = match selection.revision_arg() {
            None => {
                let source = file.local_path();
                self.fs.copy_file(&source, &output_file)?;
                let modified = self.fs.modified_time(&source)?;
                SideTimestamp::from_local(DateTime::<Local>::from(modified))
            }
            Some(rev) => {
                let content = self
                    .executor
                    .cat_raw(&file.working_dir, &rev, &file.repo_path())?;
                self.fs.write_file(&output_file, &content)?;
                let log = self.executor.log_revision_raw(&file.working_dir, &rev)?;
                Parser::parse_revision_timestamp(&log)?
            }
        };

        info!(
            artifact = %selection.identifier(&file.name),
            output = %output_file.display(),
            "artifact written"
        );
        Ok(ResolvedArtifact {
            selection,
            identifier: selection.identifier(&file.name),
            output_file,
            timestamp,
        })
    }
}

fn classify(label: &str, project_name: &str) -> Result<Selection, SvnError> {
    Selection::from_label(label, project_name)
        .ok_or_else(|| SvnError::InvalidLabel(label.to_string()))
}

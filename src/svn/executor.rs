//! svn command executor
//!
//! Handles running svn commands and capturing their output.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::SvnError;
use super::constants::{self, commands, errors, flags, special};

/// Runs an external program in a working directory and captures its stdout
///
/// A non-zero exit must be reported as [`SvnError::CommandFailed`] carrying
/// the captured stderr.
pub trait CommandRunner {
    fn run(&self, working_dir: &Path, program: &str, args: &[&str]) -> Result<Vec<u8>, SvnError>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, SvnError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SvnError::SvnNotFound
                } else {
                    SvnError::IoError(e)
                }
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);
            Err(command_failure(
                working_dir,
                program,
                args,
                stderr,
                exit_code,
            ))
        }
    }
}

/// Classify a non-zero exit, keeping the command line and stderr
fn command_failure(
    working_dir: &Path,
    program: &str,
    args: &[&str],
    stderr: String,
    exit_code: i32,
) -> SvnError {
    let command = format!(
        "{} (in {})",
        render_command(program, args),
        working_dir.display()
    );
    if stderr.contains(errors::NOT_A_WORKING_COPY) {
        SvnError::NotAWorkingCopy { command, stderr }
    } else {
        SvnError::CommandFailed {
            command,
            stderr,
            exit_code,
        }
    }
}

/// Executor for svn commands
#[derive(Debug, Clone)]
pub struct SvnExecutor<R = ProcessRunner> {
    /// Program to invoke (normally `svn`)
    program: String,
    runner: R,
}

impl Default for SvnExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SvnExecutor {
    /// Create an executor running `svn` from PATH
    pub fn new() -> Self {
        Self::with_runner(ProcessRunner)
    }
}

impl<R: CommandRunner> SvnExecutor<R> {
    /// Create an executor on top of a custom runner
    pub fn with_runner(runner: R) -> Self {
        Self {
            program: constants::SVN_COMMAND.to_string(),
            runner,
        }
    }

    /// Use a different svn binary (e.g. an absolute path)
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run an svn command and return raw stdout bytes
    pub fn run_bytes(&self, working_dir: &Path, args: &[&str]) -> Result<Vec<u8>, SvnError> {
        debug!(
            dir = %working_dir.display(),
            command = %render_command(&self.program, args),
            "running svn"
        );
        self.runner.run(working_dir, &self.program, args)
    }

    /// Run an svn command and return stdout decoded as text
    pub fn run(&self, working_dir: &Path, args: &[&str]) -> Result<String, SvnError> {
        let stdout = self.run_bytes(working_dir, args)?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    /// Run `svn log --xml -r HEAD:0 <path>`
    pub fn log_xml_raw(&self, working_dir: &Path, path: &str) -> Result<String, SvnError> {
        self.run(
            working_dir,
            &[
                commands::LOG,
                flags::XML,
                flags::REVISION,
                special::FULL_RANGE,
                path,
            ],
        )
    }

    /// Run `svn cat -r <rev> <path>`, returning the file content untouched
    pub fn cat_raw(&self, working_dir: &Path, rev: &str, path: &str) -> Result<Vec<u8>, SvnError> {
        self.run_bytes(working_dir, &[commands::CAT, flags::REVISION, rev, path])
    }

    /// Run `svn log -r <rev>` (plain text)
    pub fn log_revision_raw(&self, working_dir: &Path, rev: &str) -> Result<String, SvnError> {
        self.run(working_dir, &[commands::LOG, flags::REVISION, rev])
    }

    /// Run `svn diff --summarize -r <from>:<to> <path>`
    pub fn diff_summarize_raw(
        &self,
        working_dir: &Path,
        from: &str,
        to: &str,
        path: &str,
    ) -> Result<String, SvnError> {
        let range = format!("{}:{}", from, to);
        self.run(
            working_dir,
            &[
                commands::DIFF,
                flags::SUMMARIZE,
                flags::REVISION,
                &range,
                path,
            ],
        )
    }

    /// Run `svn info --show-item wc-root`
    pub fn wc_root_raw(&self, working_dir: &Path) -> Result<String, SvnError> {
        self.run(
            working_dir,
            &[commands::INFO, flags::SHOW_ITEM, special::WC_ROOT],
        )
    }
}

/// Render a command line for logs and error messages
fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

//! svn command execution layer
//!
//! This module handles executing svn commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::{CommandRunner, ProcessRunner, SvnExecutor};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when executing svn commands or materializing their output
#[derive(Error, Debug)]
pub enum SvnError {
    #[error("Not an svn working copy: `{command}`: {stderr}")]
    NotAWorkingCopy { command: String, stderr: String },

    #[error("`{command}` failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        command: String,
        stderr: String,
        exit_code: i32,
    },

    #[error("Failed to parse svn output: {0}")]
    ParseError(String),

    #[error("Invalid revision label: {0:?}")]
    InvalidLabel(String),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("svn is not installed or not in PATH")]
    SvnNotFound,
}

impl SvnError {
    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

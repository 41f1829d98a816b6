//! boardrev - board file revisions from Subversion
//!
//! Resolves two points in the history of an svn-tracked board file into two
//! standalone copies on disk, ready for a visual diff tool.
//!
//! This library provides:
//! - [`svn`]: svn command execution and parsing
//! - [`history`]: revision history of a tracked file
//! - [`resolver`]: extraction of two revisions into output directories
//! - [`project`]: working-copy root and tracked file paths
//! - [`model`]: Domain models
//! - [`fs`], [`config`], [`logging`]: injected services and ambient setup

pub mod config;
pub mod fs;
pub mod history;
pub mod logging;
pub mod model;
pub mod project;
pub mod resolver;
pub mod svn;

#[cfg(test)]
mod testing;

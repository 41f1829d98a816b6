//! Runtime configuration
//!
//! Passed explicitly to the components that need it; there is no global.

use std::env;
use std::path::{Path, PathBuf};

use crate::svn::constants::SVN_COMMAND;

/// Environment variable overriding [`Config::output_dir`]
pub const OUTPUT_DIR_ENV: &str = "BOARDREV_OUTPUT_DIR";

/// Environment variable overriding [`Config::svn_command`]
pub const SVN_ENV: &str = "BOARDREV_SVN";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory for extracted artifacts
    ///
    /// A relative path is resolved against the directory svn runs in.
    pub output_dir: PathBuf,

    /// svn binary to invoke
    pub svn_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            svn_command: SVN_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `BOARDREV_OUTPUT_DIR` and `BOARDREV_SVN`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(svn) = lookup(SVN_ENV).filter(|v| !v.is_empty()) {
            config.svn_command = svn;
        }
        config
    }

    /// Output root for commands running in `working_dir`
    pub fn output_root(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.output_dir)
    }
}

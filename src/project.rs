//! Tracked board file location
//!
//! Resolves where a project sits inside its working copy and derives the
//! paths svn queries and output directories use.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::model::Selection;
use crate::svn::parser::Parser;
use crate::svn::{CommandRunner, SvnError, SvnExecutor};

/// A project directory located inside its working copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    /// Absolute working-copy root
    pub root: PathBuf,
    /// Project directory relative to `root` (`.` for the root itself)
    pub subpath: PathBuf,
}

impl ProjectLocation {
    /// The board file `name` of this project, addressed from the root
    pub fn tracked_file(&self, name: impl Into<String>) -> TrackedFile {
        TrackedFile::new(self.root.clone(), self.subpath.clone(), name)
    }
}

/// Query the working-copy root and express `working_dir` relative to it
pub fn locate_project_root<R: CommandRunner>(
    executor: &SvnExecutor<R>,
    working_dir: &Path,
) -> Result<ProjectLocation, SvnError> {
    let output = executor.wc_root_raw(working_dir)?;
    let root = Parser::parse_wc_root(&output)?;

    let canonical_root = root
        .canonicalize()
        .map_err(|e| SvnError::filesystem(&root, e))?;
    let canonical_dir = working_dir
        .canonicalize()
        .map_err(|e| SvnError::filesystem(working_dir, e))?;

    let relative = canonical_dir.strip_prefix(&canonical_root).map_err(|_| {
        SvnError::ParseError(format!(
            "{} is not inside working copy {}",
            canonical_dir.display(),
            canonical_root.display()
        ))
    })?;
    let subpath = if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative.to_path_buf()
    };

    info!(root = %root.display(), subpath = %subpath.display(), "located working copy");
    Ok(ProjectLocation { root, subpath })
}

/// The board file being compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    /// Directory svn commands run in
    pub working_dir: PathBuf,
    /// Project directory relative to `working_dir`
    pub subpath: PathBuf,
    /// Board file name; also the working-copy label
    pub name: String,
}

impl TrackedFile {
    pub fn new(working_dir: PathBuf, subpath: PathBuf, name: impl Into<String>) -> Self {
        let subpath = normalize(&subpath);
        Self {
            working_dir,
            subpath,
            name: name.into(),
        }
    }

    /// Path handed to svn, `/`-separated and relative to `working_dir`
    pub fn repo_path(&self) -> String {
        let mut parts: Vec<String> = self
            .subpath
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.push(self.name.clone());
        parts.join("/")
    }

    /// The working-copy file on disk
    pub fn local_path(&self) -> PathBuf {
        self.working_dir.join(&self.subpath).join(&self.name)
    }

    /// `<output_root>/<subpath>/<label>`
    pub fn output_dir(&self, output_root: &Path, selection: &Selection) -> PathBuf {
        let dir = output_root.join(&self.subpath).join(selection.dir_name());
        debug!(dir = %dir.display(), "output directory");
        dir
    }
}

/// Drop `.` components so `.` and `` mean the same project
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

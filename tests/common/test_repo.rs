//! TestRepo helper for integration tests.
//!
//! Provides a temporary svn repository with a checked-out working copy.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary svn repository plus working copy for testing.
///
/// Layout inside the temp directory: `repo/` (created by svnadmin),
/// `wc/` (checkout), `config/` (isolated svn config).
/// Everything is cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new repository and check it out.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = dir.path().join("repo");

        let output = Command::new("svnadmin")
            .arg("create")
            .arg(&repo)
            .output()
            .expect("Failed to execute svnadmin create");
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("svnadmin create failed: {}", stderr);
        }

        let this = Self { dir };
        let url = format!("file://{}", repo.display());
        let wc = this.path().to_string_lossy().into_owned();
        let parent = this.dir.path().to_path_buf();
        this.svn_in(&parent, &["checkout", url.as_str(), wc.as_str()]);
        this
    }

    /// Get the path to the working-copy root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("wc")
    }

    /// Execute an svn command in the working copy.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn svn(&self, args: &[&str]) -> String {
        self.svn_in(&self.path(), args)
    }

    /// Execute an svn command, returning raw stdout bytes.
    pub fn svn_bytes(&self, args: &[&str]) -> Vec<u8> {
        let output = self
            .command(&self.path(), args)
            .output()
            .expect("Failed to execute svn command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "svn {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        output.stdout
    }

    fn svn_in(&self, dir: &Path, args: &[&str]) -> String {
        let output = self
            .command(dir, args)
            .output()
            .expect("Failed to execute svn command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "svn {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new("svn");
        cmd.arg("--non-interactive")
            .arg("--config-dir")
            .arg(self.dir.path().join("config"))
            .args(args)
            .current_dir(dir);
        cmd
    }

    /// Write a file in the working copy.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file from the working copy.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap_or_default()
    }

    /// Schedule every new file, commit, and bring the working copy up to date.
    ///
    /// Returns the new revision number.
    pub fn commit(&self, message: &str) -> u64 {
        self.svn(&["add", "--force", "."]);
        self.svn(&["commit", "--username", "tester", "-m", message]);
        self.svn(&["update"]);
        self.svn(&["info", "--show-item", "revision"])
            .trim()
            .parse()
            .expect("svn info returned a non-numeric revision")
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

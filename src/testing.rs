//! Test doubles shared by unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::svn::{CommandRunner, SvnError};

type Reply = Result<Vec<u8>, (String, i32)>;

/// [`CommandRunner`] answering from a fixed table keyed by argument list
///
/// Unknown commands fail like an svn error would. Every call is recorded.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    replies: HashMap<Vec<String>, Reply>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, args: &[&str], stdout: &str) -> Self {
        self.reply_bytes(args, stdout.as_bytes())
    }

    pub fn reply_bytes(mut self, args: &[&str], stdout: &[u8]) -> Self {
        self.replies.insert(key(args), Ok(stdout.to_vec()));
        self
    }

    pub fn fail(mut self, args: &[&str], stderr: &str, exit_code: i32) -> Self {
        self.replies
            .insert(key(args), Err((stderr.to_string(), exit_code)));
        self
    }

    /// Command lines seen so far, program excluded
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(
        &self,
        _working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, SvnError> {
        self.calls.borrow_mut().push(args.join(" "));
        let command = format!("{} {}", program, args.join(" "));
        match self.replies.get(&key(args)) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err((stderr, exit_code))) => Err(SvnError::CommandFailed {
                command,
                stderr: stderr.clone(),
                exit_code: *exit_code,
            }),
            None => Err(SvnError::CommandFailed {
                command,
                stderr: "svn: E000000: unscripted command".to_string(),
                exit_code: 1,
            }),
        }
    }
}

fn key(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! svn repositories in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_macros)]

pub mod test_repo;

pub use test_repo::TestRepo;

use std::process::Command;

/// Are both `svn` and `svnadmin` runnable?
pub fn svn_available() -> bool {
    ["svn", "svnadmin"].iter().all(|bin| {
        Command::new(bin)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

/// Return early from a test when svn is not installed.
macro_rules! skip_if_no_svn {
    () => {
        if !common::svn_available() {
            eprintln!("svn not available, skipping test");
            return;
        }
    };
}

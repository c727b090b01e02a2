//! Shared testing harness for `thrive` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `thrive` binary within the work directory.
    ///
    /// The API key variable is cleared so nothing reaches a real endpoint.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("thrive").expect("Failed to locate thrive binary");
        cmd.current_dir(self.work_dir()).env_remove("OPENAI_API_KEY").env_remove("THRIVE_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `thrive.toml` in the work directory.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("thrive.toml", content)
    }
}

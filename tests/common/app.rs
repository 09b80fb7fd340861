//! Runs the g4hex binary inside a scratch directory.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Scratch directory plus a handle for invoking the binary in it
pub struct TestCli {
    dir: TempDir,
}

/// Captured result of one binary invocation
pub struct TestOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestCli {
    /// Create an empty scratch directory
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of the scratch directory
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write raw bytes to a file in the scratch directory
    pub fn write_file(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, data).expect("Failed to write fixture");
        path
    }

    /// Run the binary with `args`, working directory set to the scratch dir
    pub fn run(&self, args: &[&str]) -> TestOutput {
        self.run_with_env(args, &[])
    }

    /// Run the binary with extra environment variables
    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> TestOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_g4hex"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG");
        for (key, value) in envs {
            command.env(key, value);
        }
        let output = command.output().expect("Failed to spawn g4hex");

        TestOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl TestOutput {
    /// Lines of stdout
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Data lines between the declaration and the closing brace
    pub fn data_lines(&self) -> Vec<&str> {
        let lines = self.lines();
        lines[2..lines.len() - 1].to_vec()
    }
}

//! Test environment for isolated revtag runs.
//!
//! Provides `TestEnv` - a temp build root with a `dist/` output directory,
//! plus helpers to run the revtag binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "REVTAG_VERSION",
    "REVTAG_OUTPUT_DIR",
    "REVTAG_LEDGER_PATH",
    "RUST_LOG",
];

/// Result of running a revtag CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated build root
pub struct TestEnv {
    pub root: TempDir,
    revtag_bin: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp build root"),
            revtag_bin: PathBuf::from(env!("CARGO_BIN_EXE_revtag")),
        }
    }

    /// Path relative to the build root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path relative to the output directory
    pub fn dist_path(&self, relative: &str) -> PathBuf {
        self.path("dist").join(relative)
    }

    /// Run revtag with the build root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.revtag_bin);
        cmd.current_dir(self.root.path()).args(args);
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute revtag");
        output_to_result(output)
    }

    /// Write a file relative to the build root
    pub fn write_file(&self, relative: &str, content: &str) {
        write(&self.path(relative), content);
    }

    /// Replace `dist/` with a freshly "built" output directory
    pub fn write_dist(&self, files: &[(&str, &str)]) {
        let dist = self.path("dist");
        if dist.exists() {
            std::fs::remove_dir_all(&dist).expect("Failed to clear dist");
        }
        for (relative, content) in files {
            write(&dist.join(relative), content);
        }
    }

    pub fn read_dist_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dist_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read dist file {}: {}", relative, e))
    }

    pub fn dist_exists(&self, relative: &str) -> bool {
        self.dist_path(relative).exists()
    }

    /// Parsed ledger at the default location
    pub fn read_ledger(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.path(".revtag-versions.json"))
            .expect("Failed to read ledger");
        serde_json::from_str(&content).expect("Ledger is not valid JSON")
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use suite_runner::core::{Launcher, TestRef};
use tempfile::{tempdir, TempDir};

/// Creates a tests root containing the given libraries and their test directories.
///
/// Each test directory gets a placeholder source file, like a real test would have.
pub fn create_tests_tree(layout: &[(&str, &[&str])]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    for (library, tests) in layout {
        let library_dir = temp_dir.path().join(library);
        fs::create_dir_all(&library_dir).expect("Failed to create library directory");
        for test in *tests {
            let test_dir = library_dir.join(test);
            fs::create_dir_all(&test_dir).expect("Failed to create test directory");
            fs::write(test_dir.join(format!("{test}.cs")), "// test body")
                .expect("Failed to write test source");
        }
    }
    temp_dir
}

/// The tree used throughout the tests: `A/t1`, `B/t2`, `B/t3`.
pub fn create_sample_tree() -> TempDir {
    create_tests_tree(&[("A", &["t1"]), ("B", &["t2", "t3"])])
}

/// Writes a launcher config that replaces the real tool with `echo`.
pub fn create_echo_config(dir: &Path) -> PathBuf {
    let config_path = dir.join("runner.toml");
    let content = r#"
language = "en"

[launcher]
program = "echo"
args = ["dispatched", "{library}", "{test}", "{project}"]
"#;
    fs::write(&config_path, content).expect("Failed to write config");
    config_path
}

/// A launcher that records what it was asked to run instead of spawning anything.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: RefCell<Vec<(PathBuf, TestRef)>>,
}

impl RecordingLauncher {
    pub fn names(&self) -> Vec<String> {
        self.launched
            .borrow()
            .iter()
            .map(|(_, test)| test.name.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.launched.borrow().len()
    }
}

impl Launcher for RecordingLauncher {
    async fn launch(&self, project_root: &Path, test: &TestRef) -> Result<()> {
        self.launched
            .borrow_mut()
            .push((project_root.to_path_buf(), test.clone()));
        Ok(())
    }
}

/// A launcher whose tool can never be started.
#[derive(Default)]
pub struct BrokenLauncher {
    pub attempts: RefCell<usize>,
}

impl Launcher for BrokenLauncher {
    async fn launch(&self, _project_root: &Path, _test: &TestRef) -> Result<()> {
        *self.attempts.borrow_mut() += 1;
        anyhow::bail!("launcher is not installed")
    }
}

//! # Console Reporting Module / 控制台报告模块
//!
//! Status, discovery and error lines for the console.
//!
//! 控制台中的状态、发现和错误输出行。
//!
//! ```text
//! Found test library: Self
//! Found test: DefaultTest
//! Running test: DefaultTest
//! Command: dotnet run --project . -- DefaultTest
//! ...
//! Tests execution finished
//! ```

use colored::*;
use std::path::Path;

use crate::core::error::ValidationError;
use crate::infra::t;

/// Prints a missing library or test as a red error line.
/// 以红色错误行打印缺失的测试库或测试。
pub fn print_validation_error(error: &ValidationError) {
    let message = match error {
        ValidationError::LibraryNotFound(path) => {
            t!("run.library_not_found", path = path.display())
        }
        ValidationError::TestNotFound(path) => t!("run.test_not_found", path = path.display()),
    };
    println!("{}", message.red());
}

/// Warns that `--test` has no effect on a bulk walk.
/// 警告 `--test` 在批量遍历时不起作用。
pub fn print_test_filter_ignored(test: &str) {
    println!("{}", t!("run.test_filter_ignored", name = test).yellow());
}

/// Warns that a directory could not be listed and is treated as empty.
///
/// 警告某个目录无法列出，并将其视为空目录。
pub fn print_directory_unreadable(dir: &Path, error: &anyhow::Error) {
    println!(
        "{}",
        t!(
            "run.dir_unreadable",
            path = dir.display(),
            error = format!("{error:#}")
        )
        .yellow()
    );
}

pub fn print_tests_root_missing(tests_root: &Path) {
    println!(
        "{}",
        t!("run.tests_root_missing", path = tests_root.display()).yellow()
    );
}

pub fn print_found_library(library: &str) {
    println!("{}", t!("run.found_library", name = library).cyan());
}

pub fn print_found_test(test: &str) {
    println!("{}", t!("run.found_test", name = test).cyan());
}

/// Status line printed right before a test is handed to the launcher.
pub fn print_running_test(test: &str) {
    println!("{}", t!("run.running_test", name = test).blue());
}

/// Reports that the launcher for `test` could not be started.
///
/// 报告无法为 `test` 启动启动器。
///
/// `{:#}` keeps the whole `anyhow` context chain on one line.
pub fn print_spawn_failure(test: &str, error: &anyhow::Error) {
    println!(
        "{}",
        t!(
            "run.spawn_failed",
            name = test,
            error = format!("{error:#}")
        )
        .red()
    );
}

/// The completion notice, printed once at the end of every run that was not rejected.
/// 完成通知，在每次未被拒绝的运行结束时打印一次。
pub fn print_execution_finished() {
    println!("{}", t!("run.execution_finished").green().bold());
}

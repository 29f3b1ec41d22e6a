//! # File System Operations Module / 文件系统操作模块
//!
//! Directory helpers used by discovery. Only directory names are ever read;
//! the contents of test directories are opaque to the runner.
//!
//! 发现过程使用的目录辅助函数。只会读取目录名，测试目录的内容对运行器不透明。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// Lists the names of the immediate subdirectories of `dir`, sorted by name.
///
/// Symlinks pointing at directories are included. Regular files and entries
/// whose names are not valid UTF-8 are skipped.
///
/// 列出 `dir` 的直接子目录名称，并按名称排序。
/// 包含指向目录的符号链接；跳过普通文件和名称不是合法 UTF-8 的条目。
///
/// # Arguments
/// * `dir` - Directory to list
///
/// # Returns
/// The sorted subdirectory names, or an error if `dir` cannot be read
pub fn subdirectory_names(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| t!("run.list_dir_failed", path = dir.display()).to_string())?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| t!("run.list_dir_failed", path = dir.display()).to_string())?;
        // `Path::is_dir` follows symlinks, unlike `DirEntry::file_type`.
        if !entry.path().is_dir() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

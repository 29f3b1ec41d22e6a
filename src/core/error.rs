//! # Error Types / 错误类型
//!
//! Validation failures of the requested filters.
//!
//! 请求过滤条件的校验失败。

use std::path::PathBuf;
use thiserror::Error;

/// A requested library or test that is not on disk.
/// 请求的测试库或测试在磁盘上不存在。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the selected test library directory does not exist: \"{}\"", .0.display())]
    LibraryNotFound(PathBuf),
    #[error("the selected test directory does not exist: \"{}\"", .0.display())]
    TestNotFound(PathBuf),
}

impl ValidationError {
    /// The path that was expected to exist.
    pub fn path(&self) -> &PathBuf {
        match self {
            ValidationError::LibraryNotFound(path) | ValidationError::TestNotFound(path) => path,
        }
    }
}

//! # Selection Planner Module / 选择计划模块
//!
//! Validates the requested library and test against the filesystem and decides
//! whether the run takes the single-test path or walks the tests root.
//!
//! 根据文件系统校验请求的测试库和测试，
//! 并决定运行走单测试路径还是遍历测试根目录。

use crate::core::error::ValidationError;
use crate::core::models::{RunOptions, Selection, TestRef};

/// Creates a selection for the given options.
///
/// Checks only happen when a library is requested:
/// - `{tests_root}/{library}` must exist, otherwise `LibraryNotFound`.
/// - If a test is requested too, `{tests_root}/{library}/{test}` must exist,
///   otherwise `TestNotFound`. On success the run short-circuits to that one test.
///
/// Without a library filter the test filter is not checked and the whole tree is walked.
///
/// 为给定选项创建选择。仅在请求了测试库时才进行检查；
/// 没有测试库过滤时不会检查测试过滤条件，而是遍历整棵目录树。
pub fn plan_selection(options: &RunOptions) -> Result<Selection, ValidationError> {
    let Some(library) = &options.library else {
        return Ok(Selection::Walk { library: None });
    };

    let library_dir = options.tests_root.join(library);
    if !library_dir.exists() {
        return Err(ValidationError::LibraryNotFound(library_dir));
    }

    match &options.test {
        Some(test) => {
            let test_dir = library_dir.join(test);
            if !test_dir.exists() {
                return Err(ValidationError::TestNotFound(test_dir));
            }
            Ok(Selection::Single(TestRef::new(library.clone(), test.clone())))
        }
        None => Ok(Selection::Walk {
            library: Some(library.clone()),
        }),
    }
}

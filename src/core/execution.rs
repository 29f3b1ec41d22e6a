//! # Test Execution Module / 测试执行模块
//!
//! Dispatches tests to a `Launcher`, strictly one after another. Each launch
//! is awaited before the next test is even discovered, so test processes never
//! overlap.
//!
//! 将测试逐个分派给 `Launcher`。每次启动都会等待其结束后才继续发现下一个测试，
//! 因此测试进程之间不会重叠。

use std::path::Path;

use crate::{
    core::{
        launcher::Launcher,
        models::{RunOptions, Selection, TestRef},
    },
    infra::fs,
    reporting::console,
};

/// Runs everything included by `selection` and returns the number of dispatches.
/// The completion notice is printed by the caller, not here.
///
/// 运行 `selection` 包含的所有测试，并返回分派次数。
/// 完成通知由调用方打印，而不是在这里。
pub async fn run_selection<L: Launcher>(
    selection: &Selection,
    options: &RunOptions,
    launcher: &L,
) -> usize {
    match selection {
        Selection::Single(test) => {
            dispatch_test(launcher, &options.project_root, test).await;
            1
        }
        Selection::Walk { .. } => walk_and_dispatch(selection, options, launcher).await,
    }
}

/// Prints the status line and hands one test to the launcher.
/// A launcher that cannot be started is reported and otherwise ignored, just
/// like a test that fails.
///
/// 打印状态行并将单个测试交给启动器。
/// 无法启动的启动器只会被报告，其余情况与失败的测试一样被忽略。
pub async fn dispatch_test<L: Launcher>(launcher: &L, project_root: &Path, test: &TestRef) {
    console::print_running_test(&test.name);
    if let Err(e) = launcher.launch(project_root, test).await {
        console::print_spawn_failure(&test.name, &e);
    }
}

/// Lists the subdirectories of `dir`, treating an unreadable directory as empty.
fn list_or_warn(dir: &Path) -> Vec<String> {
    match fs::subdirectory_names(dir) {
        Ok(names) => names,
        Err(e) => {
            console::print_directory_unreadable(dir, &e);
            Vec::new()
        }
    }
}

/// Walks `{tests_root}/{library}/{test}` and dispatches every test under each
/// library included by the selection. The test filter is not applied here.
/// Directories that cannot be read contribute no entries; the walk goes on.
async fn walk_and_dispatch<L: Launcher>(
    selection: &Selection,
    options: &RunOptions,
    launcher: &L,
) -> usize {
    if !options.tests_root.exists() {
        console::print_tests_root_missing(&options.tests_root);
        return 0;
    }

    let mut dispatched = 0;
    for library in list_or_warn(&options.tests_root) {
        if !selection.includes_library(&library) {
            continue;
        }
        console::print_found_library(&library);

        let library_dir = options.tests_root.join(&library);
        for name in list_or_warn(&library_dir) {
            console::print_found_test(&name);
            let test = TestRef::new(library.clone(), name);
            dispatch_test(launcher, &options.project_root, &test).await;
            dispatched += 1;
        }
    }

    dispatched
}

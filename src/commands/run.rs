//! # Run Command Module / 运行命令模块
//!
//! Validates the requested filters, walks the tests root and dispatches every
//! selected test, then prints the completion notice.
//!
//! 校验请求的过滤条件，遍历测试根目录并分派每个选中的测试，最后打印完成通知。

use crate::{
    core::{
        execution::run_selection,
        launcher::Launcher,
        models::{RunOptions, RunOutcome},
        planner,
    },
    reporting::console,
};

/// Executes a run with the given options.
///
/// 使用给定的选项执行一次运行。
///
/// # Arguments
/// * `options` - Parsed invocation options
///               解析后的调用选项
/// * `launcher` - Runs each selected test to completion
///                将每个选中的测试运行至结束
///
/// # Returns
/// `RunOutcome::Rejected` if a requested library or test does not exist (after
/// printing the error), otherwise `RunOutcome::Completed` with the number of
/// dispatches. Unreadable directories never abort the run.
///
/// 如果请求的测试库或测试不存在，则在打印错误后返回 `RunOutcome::Rejected`；
/// 否则返回带有分派次数的 `RunOutcome::Completed`。无法读取的目录不会中止运行。
pub async fn execute<L: Launcher>(options: &RunOptions, launcher: &L) -> RunOutcome {
    let selection = match planner::plan_selection(options) {
        Ok(selection) => selection,
        Err(e) => {
            console::print_validation_error(&e);
            return RunOutcome::Rejected(e);
        }
    };

    if options.test_filter_ignored() {
        console::print_test_filter_ignored(options.test.as_deref().unwrap_or_default());
    }

    let dispatched = run_selection(&selection, options, launcher).await;
    console::print_execution_finished();

    RunOutcome::Completed { dispatched }
}

//! # Reporting Module / 报告模块
//!
//! Every line the runner itself prints goes through this module, colored with
//! `colored` and localized with `rust-i18n`. Output of the launched tests is not
//! touched; it streams straight to the console.
//!
//! 运行器自身打印的每一行都经过此模块，使用 `colored` 着色并通过 `rust-i18n` 本地化。
//! 被启动测试的输出不经过处理，直接流向控制台。

pub mod console;

pub use console::{
    print_directory_unreadable, print_execution_finished, print_found_library, print_found_test, print_running_test,
    print_spawn_failure, print_test_filter_ignored, print_tests_root_missing,
    print_validation_error,
};

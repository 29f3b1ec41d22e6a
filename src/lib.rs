//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the `suite-runner` tool,
//! a small dispatcher that discovers test libraries and tests on disk and hands
//! each test, one at a time, to an external build-and-run tool.
//!
//! 此库为 `suite-runner` 工具提供核心功能，
//! 这是一个发现磁盘上的测试库和测试，并将每个测试逐个交给外部构建运行工具的小型分派器。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, launcher config, validation and the dispatch walk
//! - `infra` - Infrastructure services like process spawning and directory listing
//! - `reporting` - Colored, localized console output
//! - `cli` - Command-line parsing and wiring
//! - `commands` - The `run` pipeline invoked by the CLI
//!
//! - `core` - 数据模型、启动器配置、校验和分派遍历
//! - `infra` - 基础设施服务，如进程派生和目录列举
//! - `reporting` - 彩色、本地化的控制台输出
//! - `cli` - 命令行解析与组装
//! - `commands` - 由 CLI 调用的 `run` 流程

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Picks the output language.
///
/// An explicit `requested` language wins, otherwise the system locale is used.
/// The result is always one of the bundled locales, falling back to `"en"`.
///
/// 选择输出语言。显式请求的语言优先，否则使用系统区域设置。
/// 结果总是内置区域设置之一，最终回退到 `"en"`。
pub fn select_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();
    resolve_locale(&locale, &available_locales)
}

/// Matches `locale` against `available`.
///
/// Tries the full tag first (e.g. "zh-CN"), then the language part only
/// (e.g. "en" from "en-US" or "en_US"), and finally falls back to "en".
///
/// 先尝试完整匹配（例如 "zh-CN"），再仅匹配语言部分，最后回退到 "en"。
pub fn resolve_locale(locale: &str, available: &[&str]) -> String {
    if available.contains(&locale) {
        return locale.to_string();
    }
    locale
        .split(['-', '_'])
        .next()
        .filter(|lang_code| available.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

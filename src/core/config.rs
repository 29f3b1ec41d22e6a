//! # Configuration Module / 配置模块
//!
//! The optional TOML file passed with `--config`. It selects the message
//! language and describes the external tool each test is handed to.
//!
//! 通过 `--config` 传入的可选 TOML 文件。它选择消息语言，
//! 并描述每个测试要交给的外部工具。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Placeholder replaced with the project root directory.
pub const PROJECT_PLACEHOLDER: &str = "{project}";
/// Placeholder replaced with the test name.
pub const TEST_PLACEHOLDER: &str = "{test}";
/// Placeholder replaced with the library the test belongs to.
pub const LIBRARY_PLACEHOLDER: &str = "{library}";

/// Describes the external tool that builds and runs a single test.
/// The default is `dotnet run --project "{project}" -- {test}`.
///
/// 描述构建并运行单个测试的外部工具。
/// 默认为 `dotnet run --project "{project}" -- {test}`。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LauncherConfig {
    /// The program to spawn. A leading `~` is expanded to the home directory.
    #[serde(default = "default_program")]
    pub program: String,
    /// Argument template. `{project}`, `{test}` and `{library}` are substituted
    /// in every argument before spawning.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Optional working directory for the spawned process.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            working_dir: None,
        }
    }
}

fn default_program() -> String {
    "dotnet".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "run".to_string(),
        "--project".to_string(),
        PROJECT_PLACEHOLDER.to_string(),
        "--".to_string(),
        TEST_PLACEHOLDER.to_string(),
    ]
}

/// The optional runner configuration, loaded from a TOML file.
/// 从 TOML 文件加载的可选运行器配置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// `--lang` on the command line takes precedence.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。命令行中的 `--lang` 优先。
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub launcher: LauncherConfig,
}

/// Parses a runner configuration from TOML text.
pub fn parse_runner_config(content: &str) -> Result<RunnerConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses the runner configuration at `path`.
pub fn load_runner_config(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config_read_failed_path", path = path.display()).to_string())?;
    parse_runner_config(&content)
        .with_context(|| t!("config_parse_failed", path = path.display()).to_string())
}

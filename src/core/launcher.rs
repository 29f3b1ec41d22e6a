//! # Launcher Module / 启动器模块
//!
//! A `Launcher` runs one test and returns once it has finished. The production
//! implementation spawns the configured external tool; tests substitute their own.
//!
//! `Launcher` 运行单个测试并在其结束后返回。生产实现会派生配置的外部工具，
//! 测试中则替换为自己的实现。

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::core::config::{
    LauncherConfig, LIBRARY_PLACEHOLDER, PROJECT_PLACEHOLDER, TEST_PLACEHOLDER,
};
use crate::core::models::TestRef;
use crate::infra::{command, t};

/// Runs a single test to completion.
/// 将单个测试运行至结束。
#[allow(async_fn_in_trait)]
pub trait Launcher {
    /// Runs `test` against the project at `project_root` and waits for it to end.
    ///
    /// The outcome of the test itself is not reported. An `Err` means the
    /// launcher could not be started at all.
    async fn launch(&self, project_root: &Path, test: &TestRef) -> Result<()>;
}

/// Launches tests by spawning the configured external build-and-run tool.
/// 通过派生配置的外部构建运行工具来启动测试。
#[derive(Debug, Clone, Default)]
pub struct CommandLauncher {
    config: LauncherConfig,
}

impl CommandLauncher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// The program to spawn, with a leading `~` expanded.
    pub fn program(&self) -> String {
        shellexpand::tilde(&self.config.program).into_owned()
    }

    /// Substitutes the placeholders of the argument template for `test`.
    /// 为 `test` 替换参数模板中的占位符。
    pub fn expand_args(&self, project_root: &Path, test: &TestRef) -> Vec<String> {
        let project = project_root.to_string_lossy();
        self.config
            .args
            .iter()
            .map(|arg| {
                arg.replace(PROJECT_PLACEHOLDER, &project)
                    .replace(LIBRARY_PLACEHOLDER, &test.library)
                    .replace(TEST_PLACEHOLDER, &test.name)
            })
            .collect()
    }
}

impl Launcher for CommandLauncher {
    async fn launch(&self, project_root: &Path, test: &TestRef) -> Result<()> {
        let program = self.program();
        let args = self.expand_args(project_root, test);

        println!(
            "{}",
            format!(
                "{} {}",
                t!("run.command_prefix"),
                command::render_command_line(&program, &args)
            )
            .dimmed()
        );

        let mut cmd = tokio::process::Command::new(&program);
        cmd.args(&args);
        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }

        // Exit status is not inspected; a failing test never stops the run.
        let _status = command::spawn_and_wait(cmd)
            .await
            .with_context(|| program.clone())?;
        Ok(())
    }
}

//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner: the data models,
//! the optional launcher config, validation of requested filters, the launcher
//! abstraction and the discovery/dispatch walk.
//!
//! 此模块包含运行器的核心功能：数据模型、可选的启动器配置、
//! 请求过滤条件的校验、启动器抽象以及发现/分派遍历。

pub mod config;
pub mod error;
pub mod execution;
pub mod launcher;
pub mod models;
pub mod planner;

// Re-exports
pub use config::RunnerConfig;
pub use error::ValidationError;
pub use execution::run_selection;
pub use launcher::{CommandLauncher, Launcher};
pub use models::{RunOptions, RunOutcome, Selection, TestRef};

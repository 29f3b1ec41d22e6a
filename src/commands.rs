//! # Commands Module / 命令模块
//!
//! The pipelines invoked by the CLI.
//!
//! 由 CLI 调用的各个流程。

pub mod run;

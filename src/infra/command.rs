//! # Command Execution Module / 命令执行模块
//!
//! Renders and spawns the external build-and-run tool.
//!
//! 渲染并派生外部构建运行工具。

use std::io;
use std::process::{ExitStatus, Stdio};

/// Renders a program and its arguments as a single, shell-quoted line.
/// Only used for display; processes are never started through a shell.
///
/// # Arguments
/// * `program` - The program name or path.
/// * `args` - The arguments passed to it.
///
/// # Returns
/// A command line where arguments containing spaces or special characters are
/// quoted. Arguments that cannot be quoted (e.g. containing NUL) are shown raw.
///
/// 将程序及其参数渲染为一行带 shell 引号的命令。仅用于显示，进程从不通过 shell 启动。
pub fn render_command_line(program: &str, args: &[String]) -> String {
    let parts = std::iter::once(program).chain(args.iter().map(String::as_str));
    match shlex::try_join(parts.clone()) {
        Ok(line) => line,
        Err(_) => parts.collect::<Vec<_>>().join(" "),
    }
}

/// Spawns a command with inherited stdio and waits for it to exit.
///
/// The child's output streams straight to the console. The caller decides
/// what, if anything, to do with the returned status.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// The `ExitStatus` of the process, or the error raised while spawning or
/// waiting for it.
///
/// 以继承的 stdio 派生命令并等待其退出。子进程的输出直接流向控制台。
pub async fn spawn_and_wait(mut cmd: tokio::process::Command) -> io::Result<ExitStatus> {
    let mut child = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?;

    child.wait().await
}

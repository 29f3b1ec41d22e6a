// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{
    commands,
    core::{
        config::{self, RunnerConfig},
        launcher::CommandLauncher,
        models::{RunOptions, RunOutcome},
    },
    infra::t,
};

/// Single-dash multi-letter flags and the long flags clap knows them by.
const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-trd", "--tests-root-dir"),
    ("-prd", "--proj-root-dir"),
];

/// Rewrites `-trd`/`-prd` (and their `=VALUE` forms) to the long flags.
///
/// clap only supports single-character short flags and would read `-trd` as
/// `-t rd`. Arguments after a literal `--` are left alone.
///
/// 将 `-trd`/`-prd`（及其 `=VALUE` 形式）改写为长参数。
/// clap 只支持单字符短参数，会把 `-trd` 解析为 `-t rd`。字面量 `--` 之后的参数保持不变。
pub fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            for (legacy, long) in LEGACY_FLAGS {
                if arg == *legacy {
                    return long.to_string();
                }
                if let Some(value) = arg.strip_prefix(legacy).and_then(|rest| rest.strip_prefix('=')) {
                    return format!("{long}={value}");
                }
            }
            arg
        })
        .collect()
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
///
/// 预解析命令行参数以查找语言设置。
/// 这使得 i18n 可以在完整的 CLI 构建之前初始化。
pub fn pre_parse_language(args: &[String]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--lang" {
            return iter.next().cloned();
        }
        if let Some(lang) = arg.strip_prefix("--lang=") {
            return Some(lang.to_string());
        }
    }
    None
}

/// Pre-parses the command line arguments to find the config file.
/// It looks for `-c <FILE>`, `--config <FILE>` or `--config=<FILE>`.
///
/// 预解析命令行参数以查找配置文件。
/// 它会查找 `-c <FILE>`、`--config <FILE>` 或 `--config=<FILE>`。
pub fn pre_parse_config(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            return None;
        }
        if arg == "-c" || arg == "--config" {
            return iter.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lib")
                .short('l')
                .long("lib")
                .help(t!("arg_lib", locale = locale).to_string())
                .value_name("LIB")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("test")
                .short('t')
                .long("test")
                .help(t!("arg_test", locale = locale).to_string())
                .value_name("TEST")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tests-root-dir")
                .long("tests-root-dir")
                .help(t!("arg_tests_root_dir", locale = locale).to_string())
                .value_name("TESTS_ROOT_DIR")
                .default_value("./FrameworkTests")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("proj-root-dir")
                .long("proj-root-dir")
                .help(t!("arg_proj_root_dir", locale = locale).to_string())
                .value_name("PROJ_ROOT_DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Builds the run options from parsed matches.
/// 根据解析结果构建运行选项。
pub fn options_from_matches(matches: &ArgMatches) -> RunOptions {
    let library = matches.get_one::<String>("lib").cloned();
    let test = matches.get_one::<String>("test").cloned();
    let tests_root = matches
        .get_one::<PathBuf>("tests-root-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("./FrameworkTests"));
    let project_root = matches
        .get_one::<PathBuf>("proj-root-dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    RunOptions::new(library, test, tests_root, project_root)
}

/// Parses the process arguments and runs the pipeline.
/// 解析进程参数并运行流程。
pub async fn run() -> Result<RunOutcome> {
    run_with_args(env::args()).await
}

/// Parses `args` (program name first) and runs the pipeline.
///
/// Both the language and the config file are pre-parsed before clap builds the
/// command, so help text and clap errors follow `--lang`, then the config's
/// `language`, then the system locale.
///
/// 解析 `args`（第一个元素为程序名）并运行流程。
/// 语言和配置文件会在 clap 构建命令之前预解析，因此帮助文本和 clap 错误
/// 依次遵循 `--lang`、配置文件中的 `language`，最后是系统区域设置。
pub async fn run_with_args<I>(args: I) -> Result<RunOutcome>
where
    I: IntoIterator<Item = String>,
{
    let args = normalize_legacy_flags(args);

    let runner_config = match pre_parse_config(&args) {
        Some(path) => config::load_runner_config(&path)?,
        None => RunnerConfig::default(),
    };

    // Initialize i18n before the CLI is built.
    let requested_language = pre_parse_language(&args).or_else(|| runner_config.language.clone());
    let language = crate::select_locale(requested_language.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches_from(args);

    let options = options_from_matches(&matches);
    let launcher = CommandLauncher::new(runner_config.launcher);

    Ok(commands::run::execute(&options, &launcher).await)
}

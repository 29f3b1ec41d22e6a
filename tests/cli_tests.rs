//! # CLI Tests / CLI 测试
//!
//! Argument handling tests, plus end-to-end runs of the `suite-runner` binary
//! with `echo` standing in for the real build-and-run tool.
//!
//! 参数处理测试，以及用 `echo` 代替真实构建运行工具的 `suite-runner` 端到端运行。

mod common;

use assert_cmd::prelude::*;
use common::{create_echo_config, create_sample_tree};
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use suite_runner::cli::{
    build_cli, normalize_legacy_flags, options_from_matches, pre_parse_config, pre_parse_language,
};

/// Counts lines written by the `echo` launcher itself, not the `Command:` preview.
fn dispatch_lines(stdout: &str) -> usize {
    stdout
        .lines()
        .filter(|line| line.starts_with("dispatched "))
        .count()
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod argument_tests {
    use super::*;

    #[test]
    fn test_legacy_flags_are_rewritten() {
        let normalized = normalize_legacy_flags(args(&[
            "suite-runner",
            "-trd",
            "Tests",
            "-prd=Proj",
            "-l",
            "Self",
        ]));
        assert_eq!(
            normalized,
            args(&[
                "suite-runner",
                "--tests-root-dir",
                "Tests",
                "--proj-root-dir=Proj",
                "-l",
                "Self",
            ])
        );
    }

    #[test]
    fn test_arguments_after_double_dash_are_untouched() {
        let normalized = normalize_legacy_flags(args(&["suite-runner", "--", "-trd"]));
        assert_eq!(normalized, args(&["suite-runner", "--", "-trd"]));
    }

    #[test]
    fn test_pre_parse_language() {
        assert_eq!(pre_parse_language(&args(&["x", "--lang", "zh-CN"])), Some("zh-CN".to_string()));
        assert_eq!(pre_parse_language(&args(&["x", "--lang=en"])), Some("en".to_string()));
        assert_eq!(pre_parse_language(&args(&["x", "-l", "Self"])), None);
    }

    #[test]
    fn test_pre_parse_config() {
        assert_eq!(pre_parse_config(&args(&["x", "-c", "a.toml"])), Some(PathBuf::from("a.toml")));
        assert_eq!(pre_parse_config(&args(&["x", "--config", "b.toml"])), Some(PathBuf::from("b.toml")));
        assert_eq!(pre_parse_config(&args(&["x", "--config=c.toml"])), Some(PathBuf::from("c.toml")));
        assert_eq!(pre_parse_config(&args(&["x", "--", "-c", "d.toml"])), None);
        assert_eq!(pre_parse_config(&args(&["x", "-l", "Self"])), None);
    }

    #[test]
    fn test_defaults() {
        let matches = build_cli("en").get_matches_from(args(&["suite-runner"]));
        let options = options_from_matches(&matches);

        assert_eq!(options.library, None);
        assert_eq!(options.test, None);
        assert_eq!(options.tests_root, PathBuf::from("./FrameworkTests"));
        assert_eq!(options.project_root, PathBuf::from("."));
    }

    #[test]
    fn test_all_flags() {
        let argv = normalize_legacy_flags(args(&[
            "suite-runner",
            "-l",
            "Self",
            "-t",
            "DefaultTest",
            "-trd",
            "QArantine/Tests",
            "-prd",
            "QArantine",
        ]));
        let matches = build_cli("en").get_matches_from(argv);
        let options = options_from_matches(&matches);

        assert_eq!(options.library.as_deref(), Some("Self"));
        assert_eq!(options.test.as_deref(), Some("DefaultTest"));
        assert_eq!(options.tests_root, PathBuf::from("QArantine/Tests"));
        assert_eq!(options.project_root, PathBuf::from("QArantine"));
    }

    #[test]
    fn test_wildcards_mean_no_filter() {
        let matches = build_cli("en").get_matches_from(args(&["suite-runner", "--lib", "*", "--test", "*"]));
        let options = options_from_matches(&matches);

        assert_eq!(options.library, None);
        assert_eq!(options.test, None);
    }
}

#[cfg(all(test, unix))]
mod binary_tests {
    use super::*;

    fn runner(tests_root: &std::path::Path, config: &std::path::Path) -> Command {
        let mut cmd = Command::cargo_bin("suite-runner").unwrap();
        cmd.env("NO_COLOR", "1")
            .arg("--lang")
            .arg("en")
            .arg("-c")
            .arg(config)
            .arg("-trd")
            .arg(tests_root)
            .arg("-prd")
            .arg("Proj");
        cmd
    }

    #[test]
    fn test_walk_runs_every_test() {
        let tree = create_sample_tree();
        let config = create_echo_config(tree.path());

        let output = runner(tree.path(), &config).arg("-t").arg("t2").output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(dispatch_lines(&stdout), 3);
        assert_eq!(stdout.matches("Found test library: ").count(), 2);
        assert_eq!(stdout.matches("Found test: ").count(), 3);
        assert_eq!(stdout.matches("Tests execution finished").count(), 1);
        assert!(stdout.contains("dispatched A t1 Proj"));
        assert!(stdout.contains("dispatched B t3 Proj"));
    }

    #[test]
    fn test_single_test_run() {
        let tree = create_sample_tree();
        let config = create_echo_config(tree.path());

        let output = runner(tree.path(), &config)
            .arg("-l")
            .arg("B")
            .arg("-t")
            .arg("t2")
            .output()
            .unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(dispatch_lines(&stdout), 1);
        assert!(stdout.contains("Running test: t2"));
        assert!(stdout.contains("dispatched B t2 Proj"));
        assert!(!stdout.contains("Found test"));
        assert_eq!(stdout.matches("Tests execution finished").count(), 1);
    }

    #[test]
    fn test_missing_library_exits_zero_with_error() {
        let tree = create_sample_tree();
        let config = create_echo_config(tree.path());

        runner(tree.path(), &config)
            .arg("--lib")
            .arg("X")
            .assert()
            .success()
            .stdout(predicate::str::contains("[ERROR] The selected test library directory does not exist"))
            .stdout(predicate::str::contains("dispatched").not())
            .stdout(predicate::str::contains("Tests execution finished").not());
    }

    #[test]
    fn test_missing_test_exits_zero_with_error() {
        let tree = create_sample_tree();
        let config = create_echo_config(tree.path());

        runner(tree.path(), &config)
            .arg("--lib")
            .arg("A")
            .arg("--test")
            .arg("Y")
            .assert()
            .success()
            .stdout(predicate::str::contains("[ERROR] The selected test directory does not exist"))
            .stdout(predicate::str::contains("dispatched").not());
    }

    #[test]
    fn test_missing_config_fails() {
        let tree = create_sample_tree();

        runner(tree.path(), &tree.path().join("nope.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn test_missing_tool_does_not_stop_run() {
        let tree = create_sample_tree();
        let config = tree.path().join("broken.toml");
        std::fs::write(
            &config,
            "[launcher]\nprogram = \"this_command_definitely_does_not_exist_12345\"\n",
        )
        .unwrap();

        let output = runner(tree.path(), &config).output().unwrap();
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.matches("Could not start the launcher").count(), 3);
        assert!(stdout.contains("Tests execution finished"));
    }

    #[test]
    fn test_tests_root_that_is_a_file_warns_and_finishes() {
        let tree = create_sample_tree();
        let config = create_echo_config(tree.path());
        let not_a_dir = tree.path().join("FrameworkTests");
        std::fs::write(&not_a_dir, "a file, not a directory").unwrap();

        runner(&not_a_dir, &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("[WARN] Could not read directory"))
            .stdout(predicate::str::contains("dispatched").not())
            .stdout(predicate::str::contains("Tests execution finished"));
    }

    #[test]
    fn test_config_language_applies_to_help() {
        let tree = create_sample_tree();
        let config = tree.path().join("zh.toml");
        std::fs::write(&config, "language = \"zh-CN\"\n").unwrap();

        Command::cargo_bin("suite-runner")
            .unwrap()
            .env("NO_COLOR", "1")
            .arg("-c")
            .arg(&config)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("在测试根目录下发现测试库"));
    }

    #[test]
    fn test_lang_flag_overrides_config_language_in_help() {
        let tree = create_sample_tree();
        let config = tree.path().join("zh.toml");
        std::fs::write(&config, "language = \"zh-CN\"\n").unwrap();

        Command::cargo_bin("suite-runner")
            .unwrap()
            .arg("--lang")
            .arg("en")
            .arg("-c")
            .arg(&config)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Discovers test libraries"));
    }
}

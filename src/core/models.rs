//! # Data Models Module / 数据模型模块
//!
//! The transient values that flow through a run: the parsed invocation options,
//! the validated selection and references to discovered tests.
//!
//! 一次运行中流转的临时值：解析后的调用选项、校验后的选择以及对已发现测试的引用。

use crate::core::error::ValidationError;
use std::fmt;
use std::path::PathBuf;

/// The legacy wildcard accepted on the command line for "no filter".
pub const WILDCARD: &str = "*";

/// Options for a single invocation. Built once at startup and read-only afterwards.
/// 单次调用的选项。在启动时构建一次，之后只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Only run tests from the library with this name. `None` runs every library.
    /// 仅运行该名称测试库中的测试。`None` 表示运行所有测试库。
    pub library: Option<String>,
    /// Only run the test with this name. Only honored together with `library`.
    /// 仅运行该名称的测试。只有同时指定 `library` 时才生效。
    pub test: Option<String>,
    /// Directory containing one subdirectory per test library.
    pub tests_root: PathBuf,
    /// Directory of the buildable project handed to the launcher.
    pub project_root: PathBuf,
}

impl RunOptions {
    pub fn new(
        library: Option<String>,
        test: Option<String>,
        tests_root: impl Into<PathBuf>,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            library: normalize_filter(library),
            test: normalize_filter(test),
            tests_root: tests_root.into(),
            project_root: project_root.into(),
        }
    }

    /// Returns true if the test filter is set but will not be applied.
    ///
    /// The test filter only takes effect on the single-test path, which needs a
    /// library as well. A bulk walk runs every test it finds.
    pub fn test_filter_ignored(&self) -> bool {
        self.library.is_none() && self.test.is_some()
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(None, None, "./FrameworkTests", ".")
    }
}

/// Maps empty values and the `"*"` wildcard to `None`.
pub fn normalize_filter(filter: Option<String>) -> Option<String> {
    filter.filter(|value| !value.is_empty() && value != WILDCARD)
}

/// A test found on disk, identified by its library and its own directory name.
/// 在磁盘上发现的测试，由其所属测试库和自身目录名标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestRef {
    pub library: String,
    pub name: String,
}

impl TestRef {
    pub fn new(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.library, self.name)
    }
}

/// What a validated run is going to execute.
/// 校验通过的运行将要执行的内容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Both library and test were requested and exist: run exactly this test.
    Single(TestRef),
    /// Walk the tests root, optionally restricted to one library.
    Walk { library: Option<String> },
}

impl Selection {
    /// Returns true if `library` is included by this selection's library filter.
    pub fn includes_library(&self, library: &str) -> bool {
        match self {
            Selection::Single(test) => test.library == library,
            Selection::Walk { library: None } => true,
            Selection::Walk {
                library: Some(filter),
            } => filter == library,
        }
    }
}

/// How a run ended.
/// 一次运行的结束方式。
#[derive(Debug)]
pub enum RunOutcome {
    /// The run went through; `dispatched` launcher invocations were made.
    Completed { dispatched: usize },
    /// A requested library or test was missing. Nothing was dispatched.
    Rejected(ValidationError),
}

impl RunOutcome {
    /// Number of launcher invocations made during the run.
    pub fn dispatched(&self) -> usize {
        match self {
            RunOutcome::Completed { dispatched } => *dispatched,
            RunOutcome::Rejected(_) => 0,
        }
    }
}

//! # Benchmark Catalog Configuration / 基准目录配置
//!
//! This module defines the catalog of libraries and tests the runner knows
//! about, along with the sets that classify tests by behavior. The built-in
//! catalog can be overridden by a TOML file.
//!
//! 此模块定义运行器已知的库和测试目录，以及按行为对测试进行分类的集合。
//! 内置目录可以通过 TOML 文件覆盖。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

pub const ALL_LIBS: [&str; 6] = ["nop", "reckless", "stdio", "fstream", "pantheios", "spdlog"];
pub const ALL_TESTS: [&str; 4] = ["periodic_calls", "call_burst", "write_files", "mandelbrot"];

/// Tests that produce a single sample per process and must be rerun to
/// collect enough of them.
pub const SINGLE_SAMPLE_TESTS: [&str; 1] = ["mandelbrot"];
/// Tests that are swept over thread counts `1..=MAX_THREADS`.
pub const THREADED_TESTS: [&str; 2] = ["call_burst", "mandelbrot"];
/// Tests that need a warm-up invocation before measurement.
pub const TESTS_WITH_DRY_RUN: [&str; 1] = ["call_burst"];
pub const MAX_THREADS: u32 = 4;

// One mandelbrot sweep over all libraries at 2 iterations takes roughly
// 12 minutes, so 100 fits in an overnight run.
pub const SINGLE_SAMPLE_TEST_ITERATIONS: u32 = 100;

pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_RESET_FILE: &str = "log.txt";

/// The benchmark catalog: which libraries and tests exist, how tests behave,
/// and where shared files live relative to the work directory.
///
/// 基准目录：存在哪些库和测试、测试的行为方式，以及共享文件相对于工作目录的位置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchMatrix {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// All known libraries, in catalog order.
    pub libs: Vec<String>,
    /// All known tests, in catalog order.
    pub tests: Vec<String>,
    pub single_sample_tests: BTreeSet<String>,
    pub threaded_tests: BTreeSet<String>,
    pub dry_run_tests: BTreeSet<String>,
    /// Upper bound (inclusive) of the thread-count sweep.
    pub max_threads: u32,
    /// Number of reset+run cycles for single-sample tests.
    pub single_sample_iterations: u32,
    /// Directory receiving `<binary>.txt` result files. Must already exist.
    pub results_dir: PathBuf,
    /// File removed before every invocation.
    pub reset_file: PathBuf,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for BenchMatrix {
    fn default() -> Self {
        Self {
            language: None,
            libs: owned(&ALL_LIBS),
            tests: owned(&ALL_TESTS),
            single_sample_tests: owned(&SINGLE_SAMPLE_TESTS).into_iter().collect(),
            threaded_tests: owned(&THREADED_TESTS).into_iter().collect(),
            dry_run_tests: owned(&TESTS_WITH_DRY_RUN).into_iter().collect(),
            max_threads: MAX_THREADS,
            single_sample_iterations: SINGLE_SAMPLE_TEST_ITERATIONS,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            reset_file: PathBuf::from(DEFAULT_RESET_FILE),
        }
    }
}

impl BenchMatrix {
    pub fn is_single_sample(&self, test: &str) -> bool {
        self.single_sample_tests.contains(test)
    }

    pub fn is_threaded(&self, test: &str) -> bool {
        self.threaded_tests.contains(test)
    }

    pub fn needs_dry_run(&self, test: &str) -> bool {
        self.dry_run_tests.contains(test)
    }

    /// Number of measured iterations for `test`.
    pub fn iterations_for(&self, test: &str) -> u32 {
        if self.is_single_sample(test) {
            self.single_sample_iterations
        } else {
            1
        }
    }

    /// Checks the numeric settings that would otherwise produce an empty sweep.
    pub fn validate(&self) -> Result<()> {
        if self.max_threads == 0 {
            bail!(t!("config.invalid_max_threads").to_string());
        }
        if self.single_sample_iterations == 0 {
            bail!(t!("config.invalid_iterations").to_string());
        }
        Ok(())
    }
}

/// Parses and validates a catalog from TOML text.
pub fn parse_bench_matrix(content: &str) -> Result<BenchMatrix> {
    let matrix: BenchMatrix = toml::from_str(content)?;
    matrix.validate()?;
    Ok(matrix)
}

/// Loads a catalog from a TOML file.
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Returns
/// The validated `BenchMatrix`, or an error naming the file
pub fn load_bench_matrix(path: &Path) -> Result<BenchMatrix> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", path = path.display()).to_string())?;
    parse_bench_matrix(&content)
        .with_context(|| t!("config.parse_failed", path = path.display()).to_string())
}

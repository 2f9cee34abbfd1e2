//! # Benchmark Execution Engine Module / 基准执行引擎模块
//!
//! This module runs the benchmark matrix strictly sequentially. Each cell is
//! an external binary whose standard output is captured in a results file;
//! before every invocation the shared reset file is removed and the
//! filesystem is synced.
//!
//! 此模块严格按顺序运行基准矩阵。每个单元都是一个外部二进制文件，其标准输出
//! 被捕获到结果文件中；每次调用前都会删除共享的重置文件并同步文件系统。

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::{
    core::{
        config::BenchMatrix,
        models::{BenchmarkCase, RunOutcome, TestPlan},
    },
    infra::{
        command::{self, Launch},
        fs, t,
    },
    reporting::console::{ProgressReporter, log_verbose},
};

/// Runs single benchmark cases inside a work directory.
///
/// 在工作目录中运行单个基准用例。
#[derive(Debug, Clone)]
pub struct Executor {
    work_dir: PathBuf,
    results_dir: PathBuf,
    reset_file: PathBuf,
    verbose: bool,
}

impl Executor {
    /// Creates an executor rooted at `work_dir`. Relative `results_dir` and
    /// `reset_file` settings of the catalog are resolved against it.
    pub fn new(work_dir: &Path, matrix: &BenchMatrix) -> Result<Self> {
        let work_dir = fs::absolute_path(work_dir)?;
        Ok(Self {
            results_dir: work_dir.join(&matrix.results_dir),
            reset_file: work_dir.join(&matrix.reset_file),
            work_dir,
            verbose: false,
        })
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the results file for `case`.
    pub fn results_path(&self, case: &BenchmarkCase) -> PathBuf {
        self.results_dir.join(case.results_file_name())
    }

    /// Removes the reset file if present and flushes the filesystem.
    pub async fn reset(&self) -> Result<()> {
        if fs::remove_if_exists(&self.reset_file).await? {
            log_verbose(
                self.verbose,
                t!("run.reset", path = self.reset_file.display()),
            );
        }
        command::sync_filesystem().await
    }

    async fn launch(&self, binary: &str, stdout: Stdio) -> Result<Launch> {
        let launch =
            command::run_to(&self.work_dir.join(binary), binary, &self.work_dir, stdout).await?;
        if launch == Launch::NotFound {
            log_verbose(self.verbose, t!("run.binary_missing", binary = binary));
        }
        Ok(launch)
    }

    /// Runs one benchmark case: an optional dry run with discarded output,
    /// then `case.iterations` reset+run cycles whose output all lands in one
    /// open results file.
    ///
    /// A missing binary does not cut the case short: the results file is
    /// still truncated and every reset+run cycle is still attempted.
    ///
    /// # Returns
    /// `RunOutcome::BinaryNotFound` if any launch found no binary. Any other
    /// launch or file system failure is an error.
    pub async fn run_benchmark(&self, case: &BenchmarkCase) -> Result<RunOutcome> {
        let binary = case.binary_name();
        let mut missing = false;

        if case.dry_run {
            self.reset().await?;
            log_verbose(self.verbose, t!("run.dry_run", binary = &binary));
            missing |= self.launch(&binary, Stdio::null()).await? == Launch::NotFound;
        }

        let results_path = self.results_path(case);
        let out = fs::create_results_file(&results_path)?;

        for iteration in 1..=case.iterations {
            self.reset().await?;
            log_verbose(
                self.verbose,
                t!(
                    "run.invoking",
                    binary = &binary,
                    iteration = iteration,
                    total = case.iterations
                ),
            );
            // Each child gets a duplicate of the same descriptor, so the
            // iterations share one file offset and append in place.
            let stdout = out.try_clone().with_context(|| {
                t!("run.results_create_failed", path = results_path.display()).to_string()
            })?;
            missing |= self.launch(&binary, Stdio::from(stdout)).await? == Launch::NotFound;
        }

        if missing {
            return Ok(RunOutcome::BinaryNotFound);
        }
        Ok(RunOutcome::Completed {
            iterations: case.iterations,
        })
    }
}

/// Runs every case of the plan in order, reporting progress as it goes.
///
/// A missing binary marks its library with `[F]` and the run continues; any
/// other error aborts the whole run.
///
/// # Returns
/// The outcome of every case, in execution order
pub async fn run_matrix<W: Write>(
    plans: &[TestPlan],
    executor: &Executor,
    reporter: &mut ProgressReporter<W>,
) -> Result<Vec<(BenchmarkCase, RunOutcome)>> {
    let progress_failed = || t!("run.progress_write_failed").to_string();
    let mut outcomes = Vec::new();

    for plan in plans {
        reporter.begin_test(&plan.test).with_context(progress_failed)?;

        for lib in &plan.libs {
            reporter.begin_lib(&lib.lib, plan.threaded).with_context(progress_failed)?;

            let mut failed = false;
            for case in &lib.cases {
                if let Some(threads) = case.threads {
                    reporter.thread(threads).with_context(progress_failed)?;
                }
                let outcome = executor.run_benchmark(case).await?;
                failed |= outcome.is_failure();
                outcomes.push((case.clone(), outcome));
            }

            if failed {
                reporter.failure().with_context(progress_failed)?;
            }
        }

        reporter.end_test().with_context(progress_failed)?;
    }

    Ok(outcomes)
}

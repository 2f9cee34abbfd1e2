//! # Run Command Module / 运行命令模块
//!
//! This module implements the benchmark run: it resolves the library and
//! test selection against the catalog, plans the matrix and drives it with
//! a live progress line on standard output.
//!
//! 此模块实现基准运行：根据目录解析库和测试的选择，
//! 规划矩阵并在标准输出上显示实时进度行来驱动执行。

use anyhow::Result;
use std::io;

use crate::{
    cli::CliArgs,
    core::{
        config::BenchMatrix,
        execution::{Executor, run_matrix},
        models::{BenchmarkCase, RunOutcome},
        planner,
    },
    reporting::console::ProgressReporter,
};

/// Executes the run command with the parsed arguments.
///
/// # Arguments
/// * `args` - The parsed command line
/// * `matrix` - The active catalog (built-in or loaded from `--config`)
///
/// # Returns
/// The outcome of every case in execution order. Missing binaries are
/// outcomes, not errors.
pub async fn execute(
    args: &CliArgs,
    matrix: &BenchMatrix,
) -> Result<Vec<(BenchmarkCase, RunOutcome)>> {
    let libs = planner::select(args.libs.clone(), &matrix.libs);
    let tests = planner::select(args.tests.clone(), &matrix.tests);
    let plans = planner::plan_matrix(matrix, &libs, &tests);

    let executor = Executor::new(&args.work_dir, matrix)?.verbose(args.verbose);
    let mut reporter = ProgressReporter::new(io::stdout());

    run_matrix(&plans, &executor, &mut reporter).await
}

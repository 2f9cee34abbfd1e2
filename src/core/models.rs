//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures passed between the planner and the
//! executor: a single cell of the benchmark matrix, the per-test plan, and the
//! outcome of running one cell.
//!
//! 此模块定义在计划器和执行器之间传递的数据结构：
//! 基准矩阵的单个单元、每个测试的计划以及运行一个单元的结果。

use std::fmt;

/// One `(lib, test, threads)` cell of the benchmark matrix, with the test's
/// traits already resolved against the catalog.
///
/// 基准矩阵中的一个 `(lib, test, threads)` 单元，测试的特性已根据目录解析。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub lib: String,
    pub test: String,
    /// Thread count encoded in the binary name, for threaded tests only.
    /// 编码在二进制文件名中的线程数，仅用于多线程测试。
    pub threads: Option<u32>,
    /// Whether a warm-up invocation with discarded output precedes measurement.
    pub dry_run: bool,
    /// Number of measured reset+run cycles.
    pub iterations: u32,
}

impl BenchmarkCase {
    /// The executable name, `<lib>_<test>` or `<lib>_<test>_<threads>`.
    pub fn binary_name(&self) -> String {
        match self.threads {
            Some(threads) => format!("{}_{}_{}", self.lib, self.test, threads),
            None => format!("{}_{}", self.lib, self.test),
        }
    }

    /// The file under the results directory that receives standard output.
    pub fn results_file_name(&self) -> String {
        format!("{}.txt", self.binary_name())
    }
}

impl fmt::Display for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.binary_name())
    }
}

/// All cases of one library for one test, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibPlan {
    pub lib: String,
    pub cases: Vec<BenchmarkCase>,
}

/// The libraries to run for one test, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    pub test: String,
    /// Whether the progress line shows a thread sweep for this test.
    pub threaded: bool,
    pub libs: Vec<LibPlan>,
}

impl TestPlan {
    /// Iterates every case of this test across all libraries.
    pub fn cases(&self) -> impl Iterator<Item = &BenchmarkCase> {
        self.libs.iter().flat_map(|lib| lib.cases.iter())
    }
}

/// The outcome of running one benchmark case.
///
/// 运行一个基准用例的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every measured iteration was launched and waited for.
    /// 每次测量迭代都已启动并等待完成。
    Completed { iterations: u32 },
    /// The binary does not exist in the work directory.
    /// 工作目录中不存在该二进制文件。
    BinaryNotFound,
}

impl RunOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::BinaryNotFound)
    }
}

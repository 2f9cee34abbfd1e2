//! # Benchmark Matrix Planner Module / 基准矩阵计划模块
//!
//! This module turns the user's library and test selection into an ordered
//! execution plan: tests in selection order, libraries in selection order,
//! and for threaded tests one case per thread count in ascending order.
//!
//! 此模块将用户选择的库和测试转换为有序的执行计划：
//! 测试和库按选择顺序排列，多线程测试按线程数升序为每个线程数生成一个用例。

use crate::core::config::BenchMatrix;
use crate::core::models::{BenchmarkCase, LibPlan, TestPlan};

/// Splits a comma-separated option value into trimmed, non-empty names.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the explicit selection unchanged, or the whole catalog sorted.
pub fn select(explicit: Option<Vec<String>>, catalog: &[String]) -> Vec<String> {
    explicit.unwrap_or_else(|| {
        let mut all = catalog.to_vec();
        all.sort();
        all
    })
}

/// Builds the cases of one library for one test.
pub fn plan_lib(matrix: &BenchMatrix, lib: &str, test: &str) -> LibPlan {
    let dry_run = matrix.needs_dry_run(test);
    let iterations = matrix.iterations_for(test);
    let case = |threads| BenchmarkCase {
        lib: lib.to_string(),
        test: test.to_string(),
        threads,
        dry_run,
        iterations,
    };

    let cases = if matrix.is_threaded(test) {
        (1..=matrix.max_threads).map(|n| case(Some(n))).collect()
    } else {
        vec![case(None)]
    };

    LibPlan {
        lib: lib.to_string(),
        cases,
    }
}

/// Creates the execution plan for the selected libraries and tests.
///
/// Names are not checked against the catalog: an unknown name simply yields
/// a binary that fails to launch.
///
/// # Arguments
/// * `matrix` - The catalog classifying tests
/// * `libs` - Libraries to run, in order
/// * `tests` - Tests to run, in order
pub fn plan_matrix(matrix: &BenchMatrix, libs: &[String], tests: &[String]) -> Vec<TestPlan> {
    tests
        .iter()
        .map(|test| TestPlan {
            test: test.clone(),
            threaded: matrix.is_threaded(test),
            libs: libs.iter().map(|lib| plan_lib(matrix, lib, test)).collect(),
        })
        .collect()
}

//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the bench runner,
//! including the benchmark catalog, matrix planning and execution.
//!
//! 此模块包含基准运行器的核心功能，
//! 包括基准目录、矩阵计划和执行逻辑。

pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::BenchMatrix;
pub use execution::{Executor, run_matrix};
pub use models::{BenchmarkCase, RunOutcome};

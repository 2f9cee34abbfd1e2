//! # Reporting Module / 报告模块
//!
//! This module handles everything the runner prints: the live progress line
//! on standard output, and the usage text and verbose log on standard error.
//!
//! 此模块处理运行器打印的所有内容：标准输出上的实时进度行，
//! 以及标准错误上的用法文本和详细日志。

pub mod console;

// Re-export common reporting functions
pub use console::{ProgressReporter, log_verbose, print_usage, usage_text};

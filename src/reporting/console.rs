//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the live progress line of a benchmark run, the usage
//! text, and the verbose per-invocation log.
//!
//! 此模块打印基准运行的实时进度行、用法文本以及详细的逐次调用日志。
//!
//! # Output Format / 输出格式
//! ```text
//! call_burst: fstream/1234 nop/1234 reckless/1234[F]
//! write_files: fstream nop[F] reckless
//! ```

use colored::*;
use std::io::{self, Write};

use crate::core::config::BenchMatrix;
use crate::infra::t;

/// The inline marker printed after a library whose binary could not be found.
pub const FAILURE_MARKER: &str = "[F]";

/// Writes the progress line token by token, flushing after every token that
/// precedes a (possibly long) benchmark run.
///
/// 逐个写入进度行的标记，在每个可能耗时较长的基准运行之前刷新输出。
pub struct ProgressReporter<W: Write> {
    out: W,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// `<test>:`
    pub fn begin_test(&mut self, test: &str) -> io::Result<()> {
        write!(self.out, "{}:", test.bold())?;
        self.out.flush()
    }

    /// ` <lib>`, followed by `/` when a thread sweep follows.
    pub fn begin_lib(&mut self, lib: &str, threaded: bool) -> io::Result<()> {
        write!(self.out, " {lib}")?;
        if threaded {
            write!(self.out, "/")?;
        }
        self.out.flush()
    }

    /// The digit of the thread count about to run.
    pub fn thread(&mut self, threads: u32) -> io::Result<()> {
        write!(self.out, "{threads}")?;
        self.out.flush()
    }

    pub fn failure(&mut self) -> io::Result<()> {
        write!(self.out, "{}", FAILURE_MARKER.red())
    }

    pub fn end_test(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Builds the usage text listing the catalog's libraries and tests.
pub fn usage_text(program: &str, matrix: &BenchMatrix) -> String {
    let lines = [
        t!("cli.usage_header", program = program).to_string(),
        t!("cli.usage_options").to_string(),
        t!("cli.opt_tests").to_string(),
        t!("cli.opt_libs").to_string(),
        t!("cli.opt_config").to_string(),
        t!("cli.opt_work_dir").to_string(),
        t!("cli.opt_lang").to_string(),
        t!("cli.opt_verbose").to_string(),
        t!("cli.opt_help").to_string(),
        t!("cli.available_libs", libs = matrix.libs.join(",")).to_string(),
        t!("cli.available_tests", tests = matrix.tests.join(",")).to_string(),
    ];
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Prints the usage text to standard error.
pub fn print_usage(program: &str, matrix: &BenchMatrix) {
    eprint!("{}", usage_text(program, matrix));
}

/// Prints a dimmed diagnostic line to standard error when `verbose` is set.
pub fn log_verbose(verbose: bool, message: impl AsRef<str>) {
    if verbose {
        eprintln!("{}", message.as_ref().dimmed());
    }
}

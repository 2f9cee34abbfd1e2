//! # Process Launching Module / 进程启动模块
//!
//! Thin wrappers around `tokio::process::Command` for running a benchmark
//! binary with redirected standard output and for flushing the filesystem.
//!
//! 对 `tokio::process::Command` 的轻量封装，用于以重定向的标准输出运行基准测试
//! 二进制文件以及刷新文件系统。

use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::infra::t;

/// What happened when a binary was launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// The process ran and exited with this status.
    Exited(ExitStatus),
    /// The executable does not exist (`ENOENT` at spawn time).
    NotFound,
}

/// Spawns `program` with standard output connected to `stdout` and waits for it.
///
/// A missing executable is reported as `Launch::NotFound`. Every other spawn
/// or wait error is returned as an error.
///
/// # Arguments
/// * `program` - Absolute path of the executable
/// * `arg0` - The name the process sees as `argv[0]` (Unix only)
/// * `cwd` - Working directory of the child
/// * `stdout` - Where the child's standard output goes
pub async fn run_to(program: &Path, arg0: &str, cwd: &Path, stdout: Stdio) -> Result<Launch> {
    let mut cmd = Command::new(program);
    #[cfg(unix)]
    cmd.arg0(arg0);
    cmd.current_dir(cwd).stdout(stdout).kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Launch::NotFound),
        Err(e) => {
            return Err(e).with_context(|| t!("run.launch_failed", binary = arg0).to_string());
        }
    };

    let status = child
        .wait()
        .await
        .with_context(|| t!("run.wait_failed", binary = arg0).to_string())?;
    Ok(Launch::Exited(status))
}

/// Runs the `sync` command and waits for it. Its exit status is ignored.
pub async fn sync_filesystem() -> Result<()> {
    Command::new("sync")
        .status()
        .await
        .with_context(|| t!("run.sync_failed").to_string())?;
    Ok(())
}

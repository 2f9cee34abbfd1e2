//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system steps of a benchmark run: resolving
//! the work directory, removing the reset file and creating result files.
//!
//! 此模块提供基准运行中的文件系统步骤：解析工作目录、删除重置文件以及创建结果文件。

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Gets the absolute path of the work directory.
///
/// # Returns
/// Canonicalized absolute path, or an error if the directory doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path)
        .with_context(|| t!("run.work_dir_not_found", path = path.display()).to_string())
}

/// Removes `path` if it exists.
///
/// # Returns
/// `true` if a file was removed, `false` if there was nothing to remove
pub async fn remove_if_exists(path: &Path) -> Result<bool> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| t!("run.reset_remove_failed", path = path.display()).to_string())
        }
    }
}

/// Creates (or truncates) a result file. The parent directory must exist.
pub fn create_results_file(path: &Path) -> Result<File> {
    File::create(path)
        .with_context(|| t!("run.results_create_failed", path = path.display()).to_string())
}

//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the bench runner,
//! including process launching, file system operations, and i18n support.
//!
//! 此模块为基准运行器提供基础设施服务，
//! 包括进程启动、文件系统操作和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;

//! # Bench Runner Library / Bench Runner 库
//!
//! This library provides the core functionality for the bench runner tool,
//! a sequential driver that executes a matrix of prebuilt benchmark binaries
//! (library x test x thread count) and captures their output.
//!
//! 此库为 bench runner 工具提供核心功能，
//! 这是一个按顺序执行预构建基准二进制矩阵（库 x 测试 x 线程数）并捕获其输出的驱动程序。
//!
//! ## Modules / 模块
//!
//! - `core` - Catalog configuration, matrix planning and benchmark execution
//! - `infra` - Infrastructure services like process launching and file system resets
//! - `reporting` - Live progress line and usage text
//! - `cli` - Command-line interface
//!
//! - `core` - 基准目录配置、矩阵规划和基准执行
//! - `infra` - 基础设施服务，如进程启动和文件系统重置
//! - `reporting` - 实时进度行和用法文本
//! - `cli` - 命令行接口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::execution;
pub use self::core::models;
pub use self::core::planner;

/// Initializes the application's internationalization (i18n).
///
/// An explicit `preferred` language wins. Otherwise the system locale is
/// detected. In both cases the full locale (e.g., "zh-CN") is tried first,
/// then just the language code (e.g., "en"), and finally the default
/// language ("en").
pub fn init_locale(preferred: Option<&str>) -> String {
    let locale = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let lang = resolve_locale(&locale, &rust_i18n::available_locales!()).to_string();

    rust_i18n::set_locale(&lang);
    lang
}

/// Picks the best match for `locale` among `available`, falling back to "en".
pub fn resolve_locale<'a>(locale: &'a str, available: &[&'a str]) -> &'a str {
    if available.contains(&locale) {
        return locale;
    }
    locale
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| available.iter().find(|l| **l == lang_code).copied())
        .unwrap_or("en")
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

#[cfg(test)]
mod tests {
    use super::resolve_locale;

    #[test]
    fn test_resolve_locale_prefers_exact_match() {
        assert_eq!(resolve_locale("zh-CN", &["en", "zh-CN"]), "zh-CN");
    }

    #[test]
    fn test_resolve_locale_falls_back_to_language_code() {
        assert_eq!(resolve_locale("en-US", &["en", "zh-CN"]), "en");
        assert_eq!(resolve_locale("en_GB", &["en", "zh-CN"]), "en");
    }

    #[test]
    fn test_resolve_locale_defaults_to_english() {
        assert_eq!(resolve_locale("fr-FR", &["en", "zh-CN"]), "en");
    }
}

// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use crate::{
    config::{BenchMatrix, load_bench_matrix},
    infra::t,
    planner::split_list,
    reporting::console::{log_verbose, print_usage},
};

pub mod commands;

pub const PROGRAM_NAME: &str = "bench-runner";

/// Exit status for `--help` and for usage errors.
pub const USAGE_EXIT_CODE: u8 = 1;

/// The parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Explicit library selection, `None` for the whole catalog.
    pub libs: Option<Vec<String>>,
    /// Explicit test selection, `None` for the whole catalog.
    pub tests: Option<Vec<String>>,
    pub config: Option<PathBuf>,
    pub work_dir: PathBuf,
    pub lang: Option<String>,
    pub verbose: bool,
    /// Set by `-h/--help` or by any positional argument.
    pub show_help: bool,
}

fn build_cli() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("tests")
                .short('t')
                .long("tests")
                .help(t!("cli.opt_tests").to_string())
                .value_name("TESTS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("libs")
                .short('l')
                .long("libs")
                .help(t!("cli.opt_libs").to_string())
                .value_name("LIBS")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.opt_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("work-dir")
                .short('C')
                .long("work-dir")
                .help(t!("cli.opt_work_dir").to_string())
                .value_name("WORK_DIR")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.opt_lang").to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.opt_verbose").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help(t!("cli.opt_help").to_string())
                .action(ArgAction::SetTrue),
        )
        .arg(
            // Positional arguments are never valid; they only trigger the usage text.
            Arg::new("positional")
                .num_args(0..)
                .hide(true)
                .action(ArgAction::Append),
        )
}

/// Parses the command line, including the program name in the first element.
pub fn parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;

    let list = |id: &str| matches.get_one::<String>(id).map(|value| split_list(value));
    let has_positional = matches
        .get_many::<String>("positional")
        .is_some_and(|mut values| values.next().is_some());

    Ok(CliArgs {
        libs: list("libs"),
        tests: list("tests"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        work_dir: matches
            .get_one::<PathBuf>("work-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        lang: matches.get_one::<String>("lang").cloned(),
        verbose: matches.get_flag("verbose"),
        show_help: matches.get_flag("help") || has_positional,
    })
}

/// Parses `args`, prints usage or runs the benchmark matrix.
///
/// # Returns
/// The process exit code: `USAGE_EXIT_CODE` for help and usage errors,
/// success otherwise. Fatal run errors are returned as `Err`.
pub async fn run<I, T>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    crate::init_locale(None);

    let cli_args = match parse_args_from(args) {
        Ok(cli_args) => cli_args,
        Err(e) => {
            eprint!("{e}");
            print_usage(PROGRAM_NAME, &BenchMatrix::default());
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
    };

    if let Some(lang) = &cli_args.lang {
        crate::init_locale(Some(lang));
    }

    let matrix = match &cli_args.config {
        Some(path) => match load_bench_matrix(path) {
            Ok(matrix) => {
                log_verbose(cli_args.verbose, t!("config.loaded", path = path.display()));
                matrix
            }
            // Usage is still printed with the built-in catalog.
            Err(e) if cli_args.show_help => {
                eprintln!(
                    "{}",
                    t!("config.help_fallback", error = format!("{e:#}"))
                        .to_string()
                        .as_str()
                        .yellow()
                );
                BenchMatrix::default()
            }
            Err(e) => return Err(e),
        },
        None => BenchMatrix::default(),
    };

    if cli_args.lang.is_none() {
        if let Some(lang) = &matrix.language {
            crate::init_locale(Some(lang));
        }
    }

    if cli_args.show_help {
        print_usage(PROGRAM_NAME, &matrix);
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    }

    commands::run::execute(&cli_args, &matrix).await?;
    Ok(ExitCode::SUCCESS)
}

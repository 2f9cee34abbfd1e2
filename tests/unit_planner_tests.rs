//! # Planner Module Unit Tests / Planner 模块单元测试
//!
//! This module tests how library and test selections are turned into the
//! ordered benchmark matrix.
//!
//! 此模块测试如何将库和测试的选择转换为有序的基准矩阵。

use bench_runner::config::{BenchMatrix, parse_bench_matrix};
use bench_runner::planner::{plan_lib, plan_matrix, select, split_list};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_split_list_trims_entries() {
        assert_eq!(split_list("nop, reckless ,spdlog"), names(&["nop", "reckless", "spdlog"]));
    }

    #[test]
    fn test_split_list_drops_empty_entries() {
        assert_eq!(split_list("nop,,stdio,"), names(&["nop", "stdio"]));
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_default_selection_is_sorted_catalog() {
        let matrix = BenchMatrix::default();

        assert_eq!(
            select(None, &matrix.libs),
            names(&["fstream", "nop", "pantheios", "reckless", "spdlog", "stdio"])
        );
        assert_eq!(
            select(None, &matrix.tests),
            names(&["call_burst", "mandelbrot", "periodic_calls", "write_files"])
        );
    }

    #[test]
    fn test_explicit_selection_keeps_order() {
        let matrix = BenchMatrix::default();
        let explicit = names(&["stdio", "nop"]);

        assert_eq!(select(Some(explicit.clone()), &matrix.libs), explicit);
    }

    #[test]
    fn test_unknown_names_are_not_validated() {
        let matrix = BenchMatrix::default();
        let plans = plan_matrix(&matrix, &names(&["glog"]), &names(&["write_files"]));

        assert_eq!(plans[0].libs[0].cases[0].binary_name(), "glog_write_files");
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn test_non_threaded_test_has_one_case_without_suffix() {
        let lib = plan_lib(&BenchMatrix::default(), "nop", "write_files");

        assert_eq!(lib.cases.len(), 1);
        let case = &lib.cases[0];
        assert_eq!(case.threads, None);
        assert_eq!(case.binary_name(), "nop_write_files");
        assert_eq!(case.results_file_name(), "nop_write_files.txt");
        assert!(!case.dry_run);
        assert_eq!(case.iterations, 1);
    }

    #[test]
    fn test_threaded_test_sweeps_one_to_four() {
        let lib = plan_lib(&BenchMatrix::default(), "reckless", "call_burst");

        let binaries: Vec<_> = lib.cases.iter().map(|c| c.binary_name()).collect();
        assert_eq!(
            binaries,
            names(&[
                "reckless_call_burst_1",
                "reckless_call_burst_2",
                "reckless_call_burst_3",
                "reckless_call_burst_4",
            ])
        );
        assert!(lib.cases.iter().all(|c| c.dry_run && c.iterations == 1));
    }

    #[test]
    fn test_single_sample_threaded_test() {
        let lib = plan_lib(&BenchMatrix::default(), "spdlog", "mandelbrot");

        assert_eq!(lib.cases.len(), 4);
        assert!(lib.cases.iter().all(|c| !c.dry_run && c.iterations == 100));
    }

    #[test]
    fn test_periodic_calls_is_plain() {
        let lib = plan_lib(&BenchMatrix::default(), "stdio", "periodic_calls");

        assert_eq!(lib.cases.len(), 1);
        assert!(!lib.cases[0].dry_run);
        assert_eq!(lib.cases[0].iterations, 1);
    }

    #[test]
    fn test_matrix_order_is_test_then_lib() {
        let matrix = BenchMatrix::default();
        let plans = plan_matrix(
            &matrix,
            &names(&["spdlog", "nop"]),
            &names(&["write_files", "call_burst"]),
        );

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].test, "write_files");
        assert!(!plans[0].threaded);
        assert_eq!(plans[1].test, "call_burst");
        assert!(plans[1].threaded);

        let order: Vec<_> = plans.iter().flat_map(|p| p.cases()).map(|c| c.binary_name()).collect();
        assert_eq!(
            order,
            names(&[
                "spdlog_write_files",
                "nop_write_files",
                "spdlog_call_burst_1",
                "spdlog_call_burst_2",
                "spdlog_call_burst_3",
                "spdlog_call_burst_4",
                "nop_call_burst_1",
                "nop_call_burst_2",
                "nop_call_burst_3",
                "nop_call_burst_4",
            ])
        );
    }

    #[test]
    fn test_full_default_matrix_size() {
        let matrix = BenchMatrix::default();
        let plans = plan_matrix(
            &matrix,
            &select(None, &matrix.libs),
            &select(None, &matrix.tests),
        );

        // 6 libs x (1 + 1 + 4 + 4) cases
        assert_eq!(plans.iter().flat_map(|p| p.cases()).count(), 60);
    }

    #[test]
    fn test_catalog_overrides_change_traits() {
        let matrix = parse_bench_matrix(
            r#"
max_threads = 2
threaded_tests = ["write_files"]
dry_run_tests = []
"#,
        )
        .unwrap();

        let write_files = plan_lib(&matrix, "nop", "write_files");
        let call_burst = plan_lib(&matrix, "nop", "call_burst");

        assert_eq!(write_files.cases.len(), 2);
        assert_eq!(write_files.cases[1].binary_name(), "nop_write_files_2");
        assert_eq!(call_burst.cases.len(), 1);
        assert!(!call_burst.cases[0].dry_run);
    }
}

// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::{TempDir, tempdir};

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then execute scripts. Executing a file
/// while another thread of the test binary is forking with it still open for
/// writing fails with `ETXTBSY`.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Creates a work directory with an empty `results/` directory.
pub fn setup_work_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir(temp_dir.path().join("results")).expect("Failed to create results directory");
    temp_dir
}

/// Installs a stand-in benchmark binary named `name`.
///
/// Every invocation appends `name` to `calls.txt`, appends `stale` if the
/// reset file from a previous invocation is still present, recreates
/// `log.txt` and prints one `sample` line to standard output.
#[cfg(unix)]
pub fn install_benchmark(dir: &Path, name: &str) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\n\
         echo {name} >> calls.txt\n\
         if [ -e log.txt ]; then echo stale >> calls.txt; fi\n\
         echo running > log.txt\n\
         echo sample\n"
    );
    let path = dir.join(name);
    fs::write(&path, script).expect("Failed to write benchmark script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make benchmark script executable");
}

/// Installs a file with the benchmark's name that cannot be executed.
pub fn install_non_executable(dir: &Path, name: &str) {
    fs::write(dir.join(name), "not a program").expect("Failed to write file");
}

/// The invocation log written by the stand-in benchmarks, one entry per line.
pub fn calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.txt"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// The content of `results/<binary>.txt`.
pub fn results(dir: &Path, binary: &str) -> String {
    fs::read_to_string(dir.join("results").join(format!("{binary}.txt")))
        .expect("Failed to read results file")
}

/// Writes a catalog file into `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("BenchMatrix.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

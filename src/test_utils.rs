//! Helpers shared by the unit tests.

use std::path::PathBuf;

/// Returns a fresh path for a throwaway SQLite database under the system temp
/// directory, removing any file left over from a previous run.
///
/// `test_name` keeps paths unique across tests running in parallel.
pub fn temp_db_path(test_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "outlay-test-{}-{test_name}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    path
}

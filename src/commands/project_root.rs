use std::path::{Path, PathBuf};

use solbundle::config::CONFIG_FILE_NAME;

/// Find the config file for an invocation directory.
///
/// Walks upward from `start` and returns the first `solbundle.toml` found.
/// Falls back to `start/solbundle.toml` (built-in defaults apply when it
/// does not exist).
pub(crate) fn discover_config(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return candidate;
        }
    }
    start.join(CONFIG_FILE_NAME)
}

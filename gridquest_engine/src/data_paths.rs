//! Runtime data directory discovery.
//!
//! The default world ships as `init.json` in the engine's `data/` directory.
//! The binary may be started from the workspace root, the crate directory or
//! next to an installed executable, so a few candidates are tried in order.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// File name of the world loaded when the player starts a new game.
pub const DEFAULT_WORLD: &str = "init.json";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Full path of the default world file.
pub fn default_world_path() -> PathBuf {
    data_path(DEFAULT_WORLD)
}

fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("gridquest_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend(candidates_under(dir));
        if let Some(parent) = dir.parent() {
            candidates.extend(candidates_under(parent));
        }
    }

    first_existing(candidates).unwrap_or_else(|| PathBuf::from("gridquest_engine/data"))
}

fn candidates_under(dir: &Path) -> [PathBuf; 2] {
    [dir.join("gridquest_engine/data"), dir.join("data")]
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|candidate| candidate.is_dir())
}

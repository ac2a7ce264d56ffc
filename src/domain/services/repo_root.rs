//! Repository root discovery
//!
//! Walks upward from an explicit starting path until a version-control
//! marker is found. Both the starting path and the marker name are
//! injected so tests can run against a fake filesystem.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::error::{SwitchyardError, SwitchyardResult};

/// Default version-control marker
pub const DEFAULT_VCS_MARKER: &str = ".git";

/// Locate the repository root containing `marker`, starting at `start`.
///
/// Failing to find the marker before the filesystem root is a fatal
/// configuration error.
pub fn discover_repository_root<FS: FileSystem + ?Sized>(
    file_system: &FS,
    start: &Path,
    marker: &str,
) -> SwitchyardResult<PathBuf> {
    for dir in start.ancestors() {
        if file_system.exists(&dir.join(marker)) {
            return Ok(dir.to_path_buf());
        }
    }

    Err(SwitchyardError::configuration(format!(
        "repository root not found: no '{marker}' marker above {}",
        start.display()
    )))
}

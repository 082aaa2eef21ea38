use std::path::PathBuf;

use tracing::{debug, warn};

use crate::models::RunContext;
use crate::utils::{has_extension_in, remove_file_if_exists};

/// Extensions never deleted: document sources, images and the fonts themselves
pub const PROTECTED_EXTENSIONS: [&str; 3] = ["tex", "png", "ttf"];

/// What cleanup did with each registered path
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub removed: Vec<PathBuf>,
    pub preserved: Vec<PathBuf>,
}

/// Delete every registered file except those with a protected extension.
///
/// Files that are already gone are ignored; other failures are logged and
/// do not stop the remaining removals.
pub fn cleanup(ctx: &RunContext) -> CleanupSummary {
    let mut summary = CleanupSummary::default();

    for path in ctx.cleanup_paths() {
        if summary.removed.contains(path) || summary.preserved.contains(path) {
            continue;
        }

        if has_extension_in(path, &PROTECTED_EXTENSIONS) {
            warn!("skipping {} from cleanup process", path.display());
            summary.preserved.push(path.clone());
            continue;
        }

        debug!("deleting {}", path.display());
        match remove_file_if_exists(path) {
            Ok(true) => summary.removed.push(path.clone()),
            Ok(false) => debug!("{} already gone", path.display()),
            Err(err) => warn!("could not delete {}: {}", path.display(), err),
        }
    }

    summary
}

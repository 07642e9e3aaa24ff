//! Directory scaffolding.

use std::fs;
use std::io::Write;
use std::path::Path;

use horizon_content::LayoutEntry;
use tracing::debug;

use crate::error::{Result, SetupError};

/// What happened to a layout directory during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyExisted,
}

/// A layout directory handled by the scaffolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedDirectory {
    pub entry: LayoutEntry,
    pub status: DirectoryStatus,
}

/// Make sure a single layout directory (and its parents) exists under `root`.
pub fn ensure_directory(root: &Path, entry: &LayoutEntry) -> Result<DirectoryStatus> {
    let path = root.join(entry.as_path());

    if path.is_dir() {
        debug!(path = %path.display(), "directory already exists");
        return Ok(DirectoryStatus::AlreadyExisted);
    }

    fs::create_dir_all(&path).map_err(|source| SetupError::CreateDirectory {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), group = %entry.group, "created directory");
    Ok(DirectoryStatus::Created)
}

/// Create every directory in `entries`, reporting each one to `out`.
///
/// Stops at the first directory that cannot be created.
pub fn scaffold_directories(
    root: &Path,
    entries: &[LayoutEntry],
    out: &mut impl Write,
) -> Result<Vec<ScaffoldedDirectory>> {
    let mut handled = Vec::with_capacity(entries.len());

    for entry in entries {
        let status = ensure_directory(root, entry)?;
        writeln!(out, "  ✅ 创建目录: {}", entry.path).map_err(SetupError::Console)?;
        handled.push(ScaffoldedDirectory {
            entry: *entry,
            status,
        });
    }

    Ok(handled)
}

//! File emitters.
//!
//! Both emitters overwrite the target unconditionally. The parent directory
//! must already exist.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SetupError};

/// Serialize `value` as two-space indented UTF-8 JSON and write it to `path`.
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(|source| SetupError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    write_text(path, &contents)
}

/// Write `contents` to `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| SetupError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_content::default_scenes;
    use tempfile::TempDir;

    #[test]
    fn test_json_is_indented_and_unescaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenes.json");

        write_json(&path, &default_scenes()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n  {\n    \"name\": \"安静小区\",\n"));
        assert!(contents.contains("\"density\": 1.0,"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_text(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/config.json");

        let err = write_json(&path, &vec![1, 2, 3]).unwrap_err();

        assert!(matches!(err, SetupError::WriteFile { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
    }
}

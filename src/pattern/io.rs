//! Reading and writing pattern files
//!
//! Pattern files are the JSON form of [`PatternRecord`]. All filesystem
//! concerns stay here; the codec itself never touches I/O.

use super::{BuiltinPattern, PatternRecord};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern record from a JSON file.
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<PatternRecord> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    let record: PatternRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))?;

    record
        .validate()
        .with_context(|| format!("Invalid pattern file: {}", path.as_ref().display()))?;

    Ok(record)
}

/// Save a pattern record to a JSON file, creating parent directories.
pub fn save_pattern_to_file<P: AsRef<Path>>(record: &PatternRecord, path: P) -> Result<()> {
    let content =
        serde_json::to_string_pretty(record).context("Failed to serialize pattern record")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write every built-in seed into `output_dir` as `<name>.json`.
pub fn create_builtin_pattern_files<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in BuiltinPattern::all() {
        let path = dir.join(format!("{}.json", pattern.name()));
        save_pattern_to_file(&pattern.record(), &path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("patterns/saved.json");

        let record = PatternRecord {
            cell_size: 12,
            grid: vec![[0, 0], [1, 2], [3, 3]],
            width: 4,
            height: 4,
        };

        save_pattern_to_file(&record, &path).unwrap();
        let loaded = load_pattern_from_file(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_pattern_from_file(&path).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_range_cells() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad_cell.json");
        std::fs::write(
            &path,
            r#"{"cell_size":20,"grid":[[9,9]],"width":3,"height":3}"#,
        )
        .unwrap();

        assert!(load_pattern_from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_pattern_from_file("does/not/exist.json").is_err());
    }

    #[test]
    fn test_create_builtin_pattern_files() {
        let temp_dir = tempdir().unwrap();
        create_builtin_pattern_files(temp_dir.path()).unwrap();

        for pattern in BuiltinPattern::all() {
            let path = temp_dir.path().join(format!("{}.json", pattern.name()));
            assert!(path.exists(), "{} missing", pattern.name());

            let loaded = load_pattern_from_file(&path).unwrap();
            assert_eq!(loaded, pattern.record());
        }
    }
}

//! Data directory resolution and dataset file access.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{error::StatsError, Result, DATA_DIR_ENV_VAR};

/// Path: ~/.local/share/hoop-stats (platform data dir)
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("hoop-stats")
}

/// Pick the data directory: explicit flag, then the environment, then the
/// platform default. The directory must exist.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = explicit
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_data_dir);

    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(StatsError::DataDirNotFound { path: dir })
    }
}

pub fn dataset_path(dir: &Path, file: &str) -> PathBuf {
    dir.join(file)
}

/// Read one dataset file. Only a file that does not exist is
/// `MissingDataset`; any other read failure surfaces as `Io`.
pub fn read_dataset(dir: &Path, file: &str) -> Result<String> {
    fs::read_to_string(dataset_path(dir, file)).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StatsError::MissingDataset {
            file: file.to_string(),
        },
        _ => StatsError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_data_dir() {
        let path = default_data_dir();
        assert!(path.ends_with("hoop-stats"));
    }

    #[test]
    fn test_resolve_data_dir_explicit() {
        let dir = tempdir().unwrap();
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_resolve_data_dir_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        match resolve_data_dir(Some(missing.clone())) {
            Err(StatsError::DataDirNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected DataDirNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_path() {
        let path = dataset_path(Path::new("/data"), "career.json");
        assert_eq!(path, PathBuf::from("/data/career.json"));
    }

    #[test]
    fn test_read_dataset_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("test.json"), "{}").unwrap();

        assert_eq!(read_dataset(dir.path(), "test.json").unwrap(), "{}");
    }

    #[test]
    fn test_read_dataset_nonexistent_file() {
        let dir = tempdir().unwrap();
        match read_dataset(dir.path(), "nonexistent.json") {
            Err(StatsError::MissingDataset { file }) => assert_eq!(file, "nonexistent.json"),
            other => panic!("Expected MissingDataset, got {:?}", other),
        }
    }

    #[test]
    fn test_read_dataset_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("game_log.json"), [0xff, 0xfe, 0x7b]).unwrap();

        match read_dataset(dir.path(), "game_log.json") {
            Err(StatsError::Io(e)) => assert_eq!(e.kind(), ErrorKind::InvalidData),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_dataset_directory_is_io_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("career.json")).unwrap();

        assert!(matches!(
            read_dataset(dir.path(), "career.json"),
            Err(StatsError::Io(_))
        ));
    }
}

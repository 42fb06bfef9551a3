//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use twinskel_core::{application::ports::Filesystem, error::SkelResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkelResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SkelResult<()> {
        // create + truncate, never create_dir_all: a missing parent is an error
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> twinskel_core::error::SkelError {
    use twinskel_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use twinskel_core::{application::ApplicationError, error::SkelError};

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b").join("c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("App.scala");
        std::fs::write(&file, "object App").unwrap();

        LocalFilesystem::new().write_file(&file, "").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "");
    }

    #[test]
    fn write_file_requires_parent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing").join("App.scala");

        let err = LocalFilesystem::new().write_file(&file, "").unwrap_err();
        match err {
            SkelError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to create file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn file_in_the_way_of_directory_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("app");
        std::fs::write(&blocker, "").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.exists(&blocker));
        assert!(fs.create_dir_all(&blocker.join("src")).is_err());
    }
}

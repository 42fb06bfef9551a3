//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use twinskel_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkelResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Paths registered with [`MemoryFilesystem::deny`] fail every
/// operation beneath them, standing in for permission errors.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: HashSet<PathBuf>,
    mutations: usize,
}

impl MemoryFilesystemInner {
    fn check_allowed(&self, path: &Path) -> SkelResult<()> {
        if self.denied.iter().any(|d| path.starts_with(d)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every operation at or below `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check whether `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of successful create/write calls so far.
    pub fn mutation_count(&self) -> usize {
        self.inner.read().map(|inner| inner.mutations).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.check_allowed(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "A file exists where a directory is needed".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        inner.mutations += 1;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SkelResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.check_allowed(path)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.mutations += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("app/src/main")).unwrap();

        assert!(fs.is_dir(Path::new("app")));
        assert!(fs.is_dir(Path::new("app/src")));
        assert!(fs.is_dir(Path::new("app/src/main")));
        assert_eq!(fs.mutation_count(), 1);
    }

    #[test]
    fn write_file_needs_parent_and_truncates() {
        let fs = MemoryFilesystem::new();
        let file = Path::new("app/App.scala");
        assert!(fs.write_file(file, "").is_err());

        fs.create_dir_all(Path::new("app")).unwrap();
        fs.write_file(file, "object App").unwrap();
        fs.write_file(file, "").unwrap();
        assert_eq!(fs.read_file(file).as_deref(), Some(""));
    }

    #[test]
    fn denied_paths_fail_without_mutation() {
        let fs = MemoryFilesystem::new();
        fs.deny("lib");

        assert!(fs.create_dir_all(Path::new("lib/src")).is_err());
        assert!(!fs.exists(Path::new("lib")));
        assert_eq!(fs.mutation_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("app")).unwrap();
        assert!(handle.exists(Path::new("app")));
    }
}

//! Filesystem capabilities used by the loader and the processor.
//! Abstracted behind a trait so the pipeline can run against an in-memory
//! implementation in tests.

use std::fs;
use std::io;
use std::path::Path;

/// The filesystem operations the generator needs.
///
/// Implementations must tolerate concurrent calls, since files are written
/// from several threads at once.
pub trait FileSystem: Send + Sync {
    /// Reads the whole file at `path` as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Returns true if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and all of its missing ancestors.
    /// Succeeds if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates the file at `path` and writes `content` into it.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let fs = LocalFileSystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        assert!(fs.exists(&nested));
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        let fs = LocalFileSystem::new();

        fs.write(&path, "hello").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }
}

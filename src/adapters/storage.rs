use crate::core::Storage;
use crate::utils::error::{EtlError, Result};
use std::fs;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|source| EtlError::ReadError {
            path: full_path.display().to_string(),
            source,
        })
    }

    // Truncates and replaces any existing content. Parent directories are
    // not created: a missing directory is an unwritable output.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|source| EtlError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }
}

use crate::domain::ports::Storage;
use crate::utils::error::{RecipeError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// In-memory `Storage` shared by the pipeline tests. Clones see the same files.
#[derive(Clone, Default)]
pub(crate) struct MemoryStorage {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().ok()?.get(path).cloned()
    }

    pub(crate) fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.file(path).ok_or_else(|| {
            RecipeError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().map_err(|_| RecipeError::ProcessingError {
            message: "memory storage lock poisoned".to_string(),
        })?;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

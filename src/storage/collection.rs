use crate::{
    error::{Result, WallError},
    model::MemoryCollection,
};
use std::path::{Path, PathBuf};

/// Reads and writes the single JSON document holding every memory record.
///
/// Every call goes to disk. There is no cache and no lock: two writers racing through
/// load/modify/save lose one of the updates.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty collection file if they are missing.
    /// An existing file is left untouched.
    pub fn ensure_initialized(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Creating empty memory collection");
            self.save(&MemoryCollection::default())?;
        }
        Ok(())
    }

    pub fn load(&self) -> Result<MemoryCollection> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            WallError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            WallError::Storage(format!("Malformed collection {}: {}", self.path.display(), e))
        })
    }

    /// Overwrites the file with the whole collection. Not atomic.
    pub fn save(&self, collection: &MemoryCollection) -> Result<()> {
        let content = serde_json::to_string_pretty(collection)?;
        std::fs::write(&self.path, content).map_err(|e| {
            WallError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), count = collection.len(), "Saved collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttachedFile, MemoryKind, MemoryRecord};
    use tempfile::TempDir;

    #[test]
    fn test_ensure_initialized_creates_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("data").join("memories.json"));

        store.ensure_initialized().unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "memories": [] }));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_initialized_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("memories.json"));

        let mut collection = MemoryCollection::default();
        collection.prepend(MemoryRecord::new(
            "m1".to_string(),
            "Ayşe".to_string(),
            MemoryKind::Photo,
        ));
        store.save(&collection).unwrap();

        store.ensure_initialized().unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("missing.json"));

        assert!(matches!(store.load(), Err(WallError::Storage(_))));
    }

    #[test]
    fn test_load_malformed_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("memories.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = CollectionStore::new(&path);
        assert!(matches!(store.load(), Err(WallError::Storage(_))));
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("memories.json"));

        let mut collection = MemoryCollection::default();
        collection.prepend(
            MemoryRecord::new("m1".to_string(), "Ayşe".to_string(), MemoryKind::Photo)
                .with_attachments(vec![AttachedFile {
                    stored_name: "1700000000000-abcdefghi.jpg".to_string(),
                    original_name: "düğün.jpg".to_string(),
                    mime_type: "image/jpeg".to_string(),
                    size_bytes: 1234,
                    url: "/uploads/1700000000000-abcdefghi.jpg".to_string(),
                }]),
        );
        collection.prepend(
            MemoryRecord::new("m2".to_string(), "Mehmet".to_string(), MemoryKind::Message)
                .with_message(Some("Hi".to_string())),
        );
        collection.prepend(MemoryRecord::new(
            "m3".to_string(),
            "Zeynep".to_string(),
            MemoryKind::Other("sticker".to_string()),
        ));

        store.save(&collection).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, collection);
    }

    #[test]
    fn test_save_uses_indented_json() {
        let temp_dir = TempDir::new().unwrap();
        let store = CollectionStore::new(temp_dir.path().join("memories.json"));
        store.save(&MemoryCollection::default()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "{\n  \"memories\": []\n}");
    }
}

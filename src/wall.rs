//! The record operations behind every route: list, create, delete, stats.
//!
//! Each call loads the whole collection from disk, works on it, and, for mutations,
//! writes the whole collection back.

use crate::{
    config::{UPLOADS_ROUTE, WallConfig},
    error::Result,
    model::{AttachedFile, MemoryCollection, MemoryKind, MemoryRecord, WallStats},
    storage::{CollectionStore, UploadStore},
    validation,
};
use chrono::Utc;

/// Text fields sent along with an upload.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub author: Option<String>,
    pub kind: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MemoryWall {
    collection: CollectionStore,
    uploads: UploadStore,
}

impl MemoryWall {
    pub fn new(collection: CollectionStore, uploads: UploadStore) -> Self {
        Self {
            collection,
            uploads,
        }
    }

    pub fn from_config(config: &WallConfig) -> Self {
        Self::new(
            CollectionStore::new(&config.storage.data_file),
            UploadStore::new(&config.storage.upload_dir, UPLOADS_ROUTE),
        )
    }

    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.uploads
    }

    /// Creates the upload directory and an empty collection file when missing.
    pub fn init(&self) -> Result<()> {
        self.uploads.ensure_dir()?;
        self.collection.ensure_initialized()
    }

    pub fn list(&self) -> Result<Vec<MemoryRecord>> {
        Ok(self.collection.load()?.memories)
    }

    pub fn create_message(
        &self,
        author: Option<&str>,
        message: Option<&str>,
    ) -> Result<MemoryRecord> {
        let (author, message) = validation::validate_message(author, message)?;

        let mut collection = self.collection.load()?;
        let record = MemoryRecord::new(
            next_id(&collection),
            author.to_string(),
            MemoryKind::Message,
        )
        .with_message(Some(message.to_string()));

        tracing::info!(id = %record.id, author = %record.author, "Creating message memory");
        collection.prepend(record.clone());
        self.collection.save(&collection)?;
        Ok(record)
    }

    /// Records an upload whose files are already stored. `kind` falls back to photo
    /// when absent or empty; any other string is kept as sent.
    pub fn record_upload(
        &self,
        form: UploadForm,
        attachments: Vec<AttachedFile>,
    ) -> Result<MemoryRecord> {
        let author = validation::validate_author(form.author.as_deref())?.to_string();
        let kind = form
            .kind
            .filter(|k| !k.is_empty())
            .map(MemoryKind::from)
            .unwrap_or_default();
        let message = form.message.filter(|m| !m.is_empty());

        let mut collection = self.collection.load()?;
        let record = MemoryRecord::new(next_id(&collection), author, kind)
            .with_message(message)
            .with_attachments(attachments);

        tracing::info!(
            id = %record.id,
            author = %record.author,
            kind = %record.kind,
            files = record.attachments.len(),
            "Creating upload memory"
        );
        collection.prepend(record.clone());
        self.collection.save(&collection)?;
        Ok(record)
    }

    /// Removes a record and its files. Unknown ids are a successful no-op; files that
    /// cannot be removed are logged and the record is dropped anyway.
    pub fn delete(&self, id: &str) -> Result<Option<MemoryRecord>> {
        let mut collection = self.collection.load()?;

        let removed = collection.remove(id);
        match &removed {
            Some(record) => {
                tracing::info!(id = %id, files = record.attachments.len(), "Deleting memory");
                for file in &record.attachments {
                    match self.uploads.remove(&file.stored_name) {
                        Ok(true) => {}
                        Ok(false) => {
                            tracing::debug!(file = %file.stored_name, "Attachment already gone")
                        }
                        Err(e) => tracing::warn!(
                            file = %file.stored_name,
                            error = %e,
                            "Failed to remove attachment"
                        ),
                    }
                }
            }
            None => tracing::debug!(id = %id, "Delete of unknown memory"),
        }

        self.collection.save(&collection)?;
        Ok(removed)
    }

    pub fn stats(&self) -> Result<WallStats> {
        Ok(self.collection.load()?.stats())
    }
}

/// `m<millis>`, with `-<n>` appended if another record already holds that id.
fn next_id(collection: &MemoryCollection) -> String {
    let base = format!("m{}", Utc::now().timestamp_millis());
    if !collection.contains_id(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let id = format!("{}-{}", base, n);
        if !collection.contains_id(&id) {
            return id;
        }
        n += 1;
    }
}

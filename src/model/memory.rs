use super::types::MemoryKind;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One uploaded file as stored on disk and referenced from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedFile {
    #[serde(rename = "filename")]
    pub stored_name: String,

    #[serde(rename = "originalname")]
    pub original_name: String,

    #[serde(rename = "mimetype")]
    pub mime_type: String,

    #[serde(rename = "size")]
    pub size_bytes: u64,

    pub url: String,
}

/// One guest contribution to the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: String,
    pub author: String,

    #[serde(rename = "type", default)]
    pub kind: MemoryKind,

    /// Milliseconds since the Unix epoch.
    #[serde(rename = "time")]
    pub created_at: i64,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(rename = "files", default)]
    pub attachments: Vec<AttachedFile>,
}

impl MemoryRecord {
    pub fn new(id: String, author: String, kind: MemoryKind) -> Self {
        Self {
            id,
            author,
            kind,
            created_at: Utc::now().timestamp_millis(),
            message: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<AttachedFile>) -> Self {
        self.attachments = attachments;
        self
    }
}

/// The persisted root document, newest record first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCollection {
    #[serde(default)]
    pub memories: Vec<MemoryRecord>,
}

impl MemoryCollection {
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub fn prepend(&mut self, record: MemoryRecord) {
        self.memories.insert(0, record);
    }

    pub fn find(&self, id: &str) -> Option<&MemoryRecord> {
        self.memories.iter().find(|m| m.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Drops every record carrying `id` and returns the first one dropped.
    pub fn remove(&mut self, id: &str) -> Option<MemoryRecord> {
        let pos = self.memories.iter().position(|m| m.id == id)?;
        let removed = self.memories.remove(pos);
        self.memories.retain(|m| m.id != id);
        Some(removed)
    }

    pub fn stats(&self) -> WallStats {
        let count = |kind: MemoryKind| self.memories.iter().filter(|m| m.kind == kind).count();
        let guests: HashSet<&str> = self.memories.iter().map(|m| m.author.as_str()).collect();

        WallStats {
            total: self.memories.len(),
            photos: count(MemoryKind::Photo),
            videos: count(MemoryKind::Video),
            audios: count(MemoryKind::Audio),
            messages: count(MemoryKind::Message),
            guests: guests.len(),
        }
    }
}

/// Counts derived from the collection; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallStats {
    pub total: usize,
    pub photos: usize,
    pub videos: usize,
    pub audios: usize,
    pub messages: usize,
    pub guests: usize,
}

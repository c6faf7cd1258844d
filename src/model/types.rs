use serde::{Deserialize, Serialize};
use std::fmt;

/// What a guest contributed. Stored as a plain string; values outside the four known
/// kinds are kept verbatim in [`MemoryKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum MemoryKind {
    #[default]
    Photo,
    Video,
    Audio,
    Message,
    Other(String),
}

impl MemoryKind {
    pub fn as_str(&self) -> &str {
        match self {
            MemoryKind::Photo => "photo",
            MemoryKind::Video => "video",
            MemoryKind::Audio => "audio",
            MemoryKind::Message => "message",
            MemoryKind::Other(s) => s,
        }
    }
}

impl fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Matching is exact: "Photo" is not a photo, it is kept as Other("Photo").
impl From<String> for MemoryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "photo" => MemoryKind::Photo,
            "video" => MemoryKind::Video,
            "audio" => MemoryKind::Audio,
            "message" => MemoryKind::Message,
            _ => MemoryKind::Other(s),
        }
    }
}

impl From<MemoryKind> for String {
    fn from(kind: MemoryKind) -> Self {
        match kind {
            MemoryKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

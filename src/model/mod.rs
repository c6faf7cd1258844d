//! Data models for the memory wall.
//!
//! - [`MemoryRecord`]: one guest contribution
//! - [`AttachedFile`]: one stored upload referenced by a record
//! - [`MemoryCollection`]: the persisted list of records, newest first
//! - [`MemoryKind`]: photo, video, audio, message (or any other string a client sent)
//! - [`WallStats`]: counts derived from a collection

mod memory;
mod types;

pub use memory::{AttachedFile, MemoryCollection, MemoryRecord, WallStats};
pub use types::MemoryKind;

//! File-based storage for the memory wall.
//!
//! State lives in two places:
//!
//! - one JSON document, `{"memories": [...]}`, rewritten whole on every change
//! - one directory of uploaded files, named by generated stored names
//!
//! ## Components
//!
//! - [`CollectionStore`]: load and save the record collection
//! - [`UploadStore`]: name, write, and remove uploaded files

mod collection;
mod uploads;

pub use collection::CollectionStore;
pub use uploads::UploadStore;

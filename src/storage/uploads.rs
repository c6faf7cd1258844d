use crate::{error::Result, validation};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Length of the random part of a stored file name.
const SUFFIX_LENGTH: usize = 9;

const ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The directory holding uploaded files, plus the public path they are served under.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    public_prefix: String,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// `<millis>-<9 random base36 chars><extension>`, e.g. `1718000000000-k3j9x0a1b.jpg`.
    /// `extension` includes its leading dot.
    pub fn generate_stored_name(&self, extension: &str) -> String {
        let suffix = nanoid::format(nanoid::rngs::default, &ALPHABET, SUFFIX_LENGTH);
        format!("{}-{}{}", Utc::now().timestamp_millis(), suffix, extension)
    }

    pub fn path_for(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }

    pub fn url_for(&self, stored_name: &str) -> String {
        format!("{}/{}", self.public_prefix, stored_name)
    }

    /// Opens a new file for an upload. Fails if the name is already taken.
    pub async fn create(&self, stored_name: &str) -> Result<tokio::fs::File> {
        validation::validate_stored_name(stored_name)?;
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.path_for(stored_name))
            .await?;
        Ok(file)
    }

    /// Deletes a stored file. A file that is already gone is not an error and
    /// yields `Ok(false)`.
    pub fn remove(&self, stored_name: &str) -> Result<bool> {
        validation::validate_stored_name(stored_name)?;
        match std::fs::remove_file(self.path_for(stored_name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[test]
    fn test_generate_stored_name_format() {
        let store = UploadStore::new("/tmp/uploads", "/uploads");
        let name = store.generate_stored_name(".JPG");

        let (millis, rest) = name.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert!(rest.ends_with(".JPG"));

        let suffix = rest.trim_end_matches(".JPG");
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_names_differ() {
        let store = UploadStore::new("/tmp/uploads", "/uploads");
        assert_ne!(
            store.generate_stored_name(".png"),
            store.generate_stored_name(".png")
        );
    }

    #[test]
    fn test_url_for_uses_public_prefix() {
        let store = UploadStore::new("/data/uploads", "/uploads/");
        assert_eq!(store.url_for("a.jpg"), "/uploads/a.jpg");
    }

    #[tokio::test]
    async fn test_create_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = UploadStore::new(temp_dir.path(), "/uploads");

        let mut file = store.create("clip.mp4").await.unwrap();
        file.write_all(b"bytes").await.unwrap();
        file.flush().await.unwrap();
        drop(file);

        assert_eq!(std::fs::read(store.path_for("clip.mp4")).unwrap(), b"bytes");
        assert!(store.remove("clip.mp4").unwrap());
        assert!(!store.path_for("clip.mp4").exists());
    }

    #[test]
    fn test_remove_missing_file_is_tolerated() {
        let temp_dir = TempDir::new().unwrap();
        let store = UploadStore::new(temp_dir.path(), "/uploads");

        assert!(!store.remove("gone.jpg").unwrap());
    }

    #[test]
    fn test_remove_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let store = UploadStore::new(temp_dir.path(), "/uploads");

        assert!(store.remove("../memories.json").is_err());
    }
}

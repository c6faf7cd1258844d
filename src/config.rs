use crate::error::{Result, WallError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "memory-wall.yml";

/// Public path under which uploaded files are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Front-end assets served for every path not matched by the API.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Per-file ceiling in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("/app/public")
}

fn default_data_file() -> PathBuf {
    PathBuf::from("/data/memories.json")
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("/data/uploads")
}

fn default_max_file_size() -> u64 {
    100 * 1024 * 1024
}

fn default_max_files() -> usize {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upload_dir: default_upload_dir(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_files: default_max_files(),
        }
    }
}

impl UploadSettings {
    /// Largest request body accepted on the upload route: every file at its
    /// ceiling plus room for the text fields.
    pub fn max_request_bytes(&self) -> usize {
        let files = self.max_file_size.saturating_mul(self.max_files as u64);
        usize::try_from(files.saturating_add(1024 * 1024)).unwrap_or(usize::MAX)
    }
}

impl WallConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WallError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: WallConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise `memory-wall.yml` in `dir` if present,
    /// otherwise the built-in defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.uploads.max_files == 0 {
            return Err(WallError::Config(
                "uploads.max_files must be at least 1".to_string(),
            ));
        }
        if self.uploads.max_file_size == 0 {
            return Err(WallError::Config(
                "uploads.max_file_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = WallConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.data_file, PathBuf::from("/data/memories.json"));
        assert_eq!(config.storage.upload_dir, PathBuf::from("/data/uploads"));
        assert_eq!(config.server.public_dir, PathBuf::from("/app/public"));
        assert_eq!(config.uploads.max_file_size, 104_857_600);
        assert_eq!(config.uploads.max_files, 10);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "server:\n  port: 8080\n").unwrap();

        let config = WallConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.uploads.max_files, 10);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = WallConfig::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_discover_finds_file_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "uploads:\n  max_files: 3\n",
        )
        .unwrap();

        let config = WallConfig::discover(None, temp_dir.path()).unwrap();
        assert_eq!(config.uploads.max_files, 3);
    }

    #[test]
    fn test_zero_max_files_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "uploads:\n  max_files: 0\n").unwrap();

        assert!(matches!(WallConfig::load(&path), Err(WallError::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        let mut config = WallConfig::default();
        config.server.port = 4321;
        config.save(&path).unwrap();

        assert_eq!(WallConfig::load(&path).unwrap().server.port, 4321);
    }

    #[test]
    fn test_max_request_bytes_covers_all_files() {
        let settings = UploadSettings {
            max_file_size: 10,
            max_files: 2,
        };
        assert_eq!(settings.max_request_bytes(), 20 + 1024 * 1024);
    }
}

mod delete;
mod init;
mod list;
mod serve;
mod stats;
mod utils;

pub use delete::handle_delete;
pub use init::handle_init;
pub use list::handle_list;
pub use serve::handle_serve;
pub use stats::handle_stats;

use crate::cli::Cli;
use crate::config::WallConfig;
use crate::wall::MemoryWall;
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: WallConfig,
    pub wall: MemoryWall,
}

impl CommandContext {
    pub fn new(config: WallConfig) -> Self {
        let wall = MemoryWall::from_config(&config);
        Self { config, wall }
    }

    /// Resolves the config file, then applies path overrides from flags and env.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = WallConfig::discover(cli.config.as_deref(), &cwd)
            .context("Failed to load memory wall configuration")?;

        if let Some(ref path) = cli.data_file {
            config.storage.data_file = path.clone();
        }
        if let Some(ref path) = cli.upload_dir {
            config.storage.upload_dir = path.clone();
        }
        if let Some(ref path) = cli.public_dir {
            config.server.public_dir = path.clone();
        }

        Ok(Self::new(config))
    }
}

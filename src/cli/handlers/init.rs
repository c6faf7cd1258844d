use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;

use super::CommandContext;

pub fn handle_init(ctx: &CommandContext, write_config: bool) -> Result<()> {
    let existed = ctx.wall.collection().path().exists();

    ctx.wall
        .init()
        .context("Failed to prepare memory wall storage")?;

    let verb = if existed { "Checked" } else { "Initialized" };
    println!("{} memory wall storage", verb.green());
    println!("  Data:    {}", ctx.wall.collection().path().display());
    println!("  Uploads: {}", ctx.wall.uploads().dir().display());

    if write_config {
        let config_path = std::env::current_dir()?.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            anyhow::bail!("Config already exists at {}", config_path.display());
        }
        ctx.config
            .save(&config_path)
            .context("Failed to write configuration")?;
        println!("  Config:  {}", config_path.display());
    }

    Ok(())
}

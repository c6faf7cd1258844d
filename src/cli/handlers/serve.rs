use anyhow::Result;
use colored::Colorize;

use crate::server::run_server;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    println!(
        "{} memory wall on http://localhost:{}",
        "Serving".green(),
        ctx.config.server.port
    );

    tokio::runtime::Runtime::new()?.block_on(async { run_server(&ctx.config).await })?;
    Ok(())
}

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;

pub fn handle_delete(ctx: &CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        print!("Delete {} and its files permanently? [y/N] ", id.cyan());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.wall.delete(&id)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "success": true,
                "id": id,
                "deleted": removed.is_some(),
            }))?
        );
    } else if let Some(memory) = removed {
        println!(
            "{} {} ({} files)",
            "Deleted".red(),
            id.cyan(),
            memory.attachments.len()
        );
    } else {
        println!("{} {} not found, nothing to delete", "Skipped".yellow(), id.cyan());
    }
    Ok(())
}

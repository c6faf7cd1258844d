use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_stats(ctx: &CommandContext, json: bool) -> Result<()> {
    let stats = ctx.wall.stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Memory wall".bold());
    println!("Total:    {}", stats.total.to_string().cyan());
    println!("Photos:   {}", stats.photos);
    println!("Videos:   {}", stats.videos);
    println!("Audio:    {}", stats.audios);
    println!("Messages: {}", stats.messages);
    println!("Guests:   {}", stats.guests.to_string().magenta());
    Ok(())
}

use crate::model::{MemoryKind, MemoryRecord};
use chrono::{DateTime, Utc};
use colored::Colorize;

pub fn print_memory_list(memories: &[MemoryRecord]) {
    if memories.is_empty() {
        println!("No memories yet.");
        return;
    }

    for memory in memories {
        let mut line = format!(
            "{} {} [{}] {}",
            memory.id.cyan(),
            format_time(memory.created_at).dimmed(),
            format_kind(&memory.kind),
            memory.author.bold()
        );
        if !memory.attachments.is_empty() {
            line.push_str(&format!(" ({} files)", memory.attachments.len()));
        }
        if let Some(ref message) = memory.message {
            line.push_str(&format!(" {}", first_line(message)));
        }
        println!("{}", line);
    }
}

pub fn format_kind(kind: &MemoryKind) -> colored::ColoredString {
    match kind {
        MemoryKind::Photo => "photo".blue(),
        MemoryKind::Video => "video".magenta(),
        MemoryKind::Audio => "audio".yellow(),
        MemoryKind::Message => "message".green(),
        MemoryKind::Other(s) => s.as_str().dimmed(),
    }
}

pub fn format_time(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

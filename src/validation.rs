//! Input validation for guest submissions.

use crate::error::{WallError, Result};
use std::path::Path;

/// File extensions accepted for uploads, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpeg", "jpg", "png", "gif", "mp4", "mov", "webm", "mp3", "ogg",
];

/// Characters that may not appear in a stored file name.
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', '\0'];

/// Validates the guest display name. An empty name counts as missing.
pub fn validate_author(author: Option<&str>) -> Result<&str> {
    match author {
        Some(a) if !a.is_empty() => Ok(a),
        _ => Err(WallError::Validation("Name is required".to_string())),
    }
}

/// Validates a text memory: both the name and the message must be present.
pub fn validate_message<'a>(
    author: Option<&'a str>,
    message: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (author, message) {
        (Some(a), Some(m)) if !a.is_empty() && !m.is_empty() => Ok((a, m)),
        _ => Err(WallError::Validation(
            "Name and message are required".to_string(),
        )),
    }
}

/// Checks the client-supplied file name against [`ALLOWED_EXTENSIONS`].
///
/// Only the suffix is looked at; file content is never inspected. Returns the
/// extension with its leading dot and original casing, ready to be appended to a
/// stored name.
pub fn validate_extension(original_name: &str) -> Result<String> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let lower = ext.to_lowercase();
    if ext.is_empty() || !ALLOWED_EXTENSIONS.contains(&lower.as_str()) {
        return Err(WallError::Validation(format!(
            "Unsupported file type: {}",
            original_name
        )));
    }
    Ok(format!(".{}", ext))
}

/// Validates a stored file name before it is joined onto the upload directory.
pub fn validate_stored_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(WallError::Validation(
            "Stored file name cannot be empty".to_string(),
        ));
    }
    if name.contains("..") {
        return Err(WallError::Validation(format!(
            "Stored file name cannot contain '..': {}",
            name
        )));
    }
    for c in FORBIDDEN_NAME_CHARS {
        if name.contains(*c) {
            return Err(WallError::Validation(format!(
                "Stored file name cannot contain '{}'",
                c.escape_default()
            )));
        }
    }
    Ok(())
}

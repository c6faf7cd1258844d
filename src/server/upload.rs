//! Streams a multipart upload to the upload directory.

use axum::extract::{Multipart, multipart::Field};
use tokio::io::AsyncWriteExt;

use crate::{
    config::UploadSettings,
    error::{Result, WallError},
    model::AttachedFile,
    storage::UploadStore,
    validation,
    wall::UploadForm,
};

const FILES_FIELDS: &[&str] = &["files", "files[]"];

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Reads every part of the form, storing file parts as they arrive.
///
/// If the request is rejected (bad extension, too many or too large files, missing
/// author) the files this request already wrote are removed again. On success the
/// caller owns the stored files.
pub async fn receive_upload(
    uploads: &UploadStore,
    limits: &UploadSettings,
    mut multipart: Multipart,
) -> Result<(UploadForm, Vec<AttachedFile>)> {
    let mut form = UploadForm::default();
    let mut files = Vec::new();

    let outcome = read_parts(uploads, limits, &mut multipart, &mut form, &mut files)
        .await
        .and_then(|()| validation::validate_author(form.author.as_deref()).map(|_| ()));

    match outcome {
        Ok(()) => Ok((form, files)),
        Err(e) => {
            discard(uploads, &files);
            Err(e)
        }
    }
}

async fn read_parts(
    uploads: &UploadStore,
    limits: &UploadSettings,
    multipart: &mut Multipart,
    form: &mut UploadForm,
    files: &mut Vec<AttachedFile>,
) -> Result<()> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);

        match file_name.as_deref() {
            // Browsers send an empty file part when no file was picked.
            Some("") => continue,
            Some(_) => {
                if !FILES_FIELDS.contains(&name.as_str()) {
                    return Err(WallError::Validation(format!(
                        "Unexpected file field: {}",
                        name
                    )));
                }
                if files.len() >= limits.max_files {
                    return Err(WallError::Validation(format!(
                        "Too many files, at most {} allowed",
                        limits.max_files
                    )));
                }
                files.push(store_file(uploads, limits.max_file_size, field).await?);
            }
            None => {
                let value = field.text().await?;
                match name.as_str() {
                    "author" => form.author = Some(value),
                    "type" => form.kind = Some(value),
                    "message" => form.message = Some(value),
                    _ => tracing::debug!(field = %name, "Ignoring unknown form field"),
                }
            }
        }
    }
    Ok(())
}

async fn store_file(uploads: &UploadStore, limit: u64, field: Field<'_>) -> Result<AttachedFile> {
    let original_name = field.file_name().unwrap_or_default().to_string();
    let mime_type = field
        .content_type()
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string();

    let extension = validation::validate_extension(&original_name)?;
    let stored_name = uploads.generate_stored_name(&extension);

    let mut file = uploads.create(&stored_name).await?;
    match copy_field(&mut file, field, limit).await {
        Ok(size_bytes) => {
            tracing::debug!(file = %stored_name, original = %original_name, size_bytes, "Stored upload");
            Ok(AttachedFile {
                url: uploads.url_for(&stored_name),
                stored_name,
                original_name,
                mime_type,
                size_bytes,
            })
        }
        Err(e) => {
            drop(file);
            if let Err(remove_err) = uploads.remove(&stored_name) {
                tracing::warn!(file = %stored_name, error = %remove_err, "Failed to remove partial upload");
            }
            Err(e)
        }
    }
}

async fn copy_field(file: &mut tokio::fs::File, mut field: Field<'_>, limit: u64) -> Result<u64> {
    let mut size = 0u64;
    while let Some(chunk) = field.chunk().await? {
        size += chunk.len() as u64;
        if size > limit {
            return Err(WallError::PayloadTooLarge(format!(
                "File exceeds the limit of {} bytes",
                limit
            )));
        }
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(size)
}

fn discard(uploads: &UploadStore, files: &[AttachedFile]) {
    for file in files {
        if let Err(e) = uploads.remove(&file.stored_name) {
            tracing::warn!(file = %file.stored_name, error = %e, "Failed to remove rejected upload");
        }
    }
}

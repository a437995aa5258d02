//! Image upload storage.

use axum::body::Bytes;
use shared::upload::{fits_image_column, is_allowed_image, secure_filename, upload_path};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// A file received in a multipart form field.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client, unsanitized.
    pub filename: String,
    pub data: Bytes,
}

/// Writes accepted images into the upload directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores an uploaded image and returns its relative path.
    ///
    /// Returns `Ok(None)` without writing anything when no file was sent,
    /// the filename is not an allowed image, or its stored path would not
    /// fit the image column. A file with the same sanitized name is
    /// overwritten.
    pub async fn store(&self, file: Option<&UploadedFile>) -> std::io::Result<Option<String>> {
        let Some(file) = file else {
            return Ok(None);
        };

        if !is_allowed_image(&file.filename) {
            debug!(filename = %file.filename, "Skipping upload with disallowed extension");
            return Ok(None);
        }

        let filename = secure_filename(&file.filename);
        if filename.is_empty() || !is_allowed_image(&filename) || !fits_image_column(&filename) {
            debug!(filename = %file.filename, "Skipping upload with unusable filename");
            return Ok(None);
        }

        fs::write(self.dir.join(&filename), &file.data).await?;
        metrics::counter!("images_uploaded_total").increment(1);
        info!(filename = %filename, bytes = file.data.len(), "Stored uploaded image");

        Ok(Some(upload_path(&filename)))
    }
}

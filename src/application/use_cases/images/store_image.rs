use crate::application::error::AppError;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::domain::images::{ImageUpload, is_allowed_image};

pub struct StoreImage<'a, S: ImageStoragePort + ?Sized> {
    pub storage: &'a S,
}

impl<'a, S: ImageStoragePort + ?Sized> StoreImage<'a, S> {
    /// Uploads an accepted image and returns its URL. Missing files, empty
    /// filenames and disallowed extensions are skipped without error.
    pub async fn execute(&self, upload: Option<&ImageUpload>) -> Result<Option<String>, AppError> {
        let Some(upload) = upload else {
            return Ok(None);
        };
        if upload.filename.is_empty() {
            return Ok(None);
        }
        if !is_allowed_image(&upload.filename) {
            tracing::debug!(filename = %upload.filename, "image_extension_ignored");
            return Ok(None);
        }
        let url = self
            .storage
            .upload_image(&upload.bytes, &upload.filename)
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, filename = %upload.filename, "image_upload_failed");
                AppError::internal("Failed to upload image")
            })?;
        Ok(Some(url))
    }
}

use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::ports::faculty_repository::FacultyRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::application::use_cases::images::store_image::StoreImage;
use crate::domain::faculty::member::{Faculty, FacultyChanges};
use crate::domain::images::ImageUpload;

pub struct UpdateFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

impl<'a, R, S> UpdateFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    /// Applies the provided fields. A new image replaces the reference; the
    /// previous object stays in storage.
    pub async fn execute(
        &self,
        id: Uuid,
        mut changes: FacultyChanges,
        image: Option<&ImageUpload>,
    ) -> Result<Faculty, AppError> {
        let images = StoreImage {
            storage: self.storage,
        };
        if let Some(url) = images.execute(image).await? {
            changes.image_url = Some(url);
        }
        let updated = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::internal("Failed to update faculty"))?;
        tracing::info!(faculty_id = %updated.id, "faculty_updated");
        Ok(updated)
    }
}

use crate::application::error::AppError;
use crate::application::ports::faculty_repository::FacultyRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::application::use_cases::images::store_image::StoreImage;
use crate::domain::faculty::member::{Faculty, NewFaculty};
use crate::domain::images::ImageUpload;

pub struct CreateFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

impl<'a, R, S> CreateFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub async fn execute(
        &self,
        mut member: NewFaculty,
        image: Option<&ImageUpload>,
    ) -> Result<Faculty, AppError> {
        let images = StoreImage {
            storage: self.storage,
        };
        if let Some(url) = images.execute(image).await? {
            member.image_url = Some(url);
        }
        let created = self.repo.create(&member).await?;
        tracing::info!(faculty_id = %created.id, "faculty_created");
        Ok(created)
    }
}

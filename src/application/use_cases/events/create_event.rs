use crate::application::error::AppError;
use crate::application::ports::event_repository::EventRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::application::use_cases::images::store_image::StoreImage;
use crate::domain::events::event::{Event, NewEvent};
use crate::domain::images::ImageUpload;

pub struct CreateEvent<'a, R, S>
where
    R: EventRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

impl<'a, R, S> CreateEvent<'a, R, S>
where
    R: EventRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    /// `event` arrives validated; the image (if accepted) is uploaded before
    /// the record is written so a failed upload leaves no row behind.
    pub async fn execute(
        &self,
        mut event: NewEvent,
        image: Option<&ImageUpload>,
    ) -> Result<Event, AppError> {
        let images = StoreImage {
            storage: self.storage,
        };
        if let Some(url) = images.execute(image).await? {
            event.image_url = Some(url);
        }
        let created = self.repo.create(&event).await?;
        tracing::info!(event_id = %created.id, has_image = created.image_url.is_some(), "event_created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryEventRepository, InMemoryImageStorage};

    fn new_event() -> NewEvent {
        NewEvent {
            title: "Hackathon".into(),
            description: String::new(),
            date: "2025-03-01".into(),
            category: "Tech".into(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn failed_upload_creates_no_record() {
        let repo = InMemoryEventRepository::default();
        let storage = InMemoryImageStorage::default();
        storage.fail_uploads();
        let uc = CreateEvent {
            repo: &repo,
            storage: &storage,
        };
        let image = ImageUpload {
            filename: "poster.png".into(),
            bytes: vec![1, 2, 3],
        };
        let err = uc.execute(new_event(), Some(&image)).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn stores_uploaded_image_url_on_record() {
        let repo = InMemoryEventRepository::default();
        let storage = InMemoryImageStorage::default();
        let uc = CreateEvent {
            repo: &repo,
            storage: &storage,
        };
        let image = ImageUpload {
            filename: "poster.webp".into(),
            bytes: vec![9],
        };
        let event = uc.execute(new_event(), Some(&image)).await.unwrap();
        assert_eq!(event.image_url, storage.stored_urls().first().cloned());
        assert_eq!(repo.all().len(), 1);
    }
}

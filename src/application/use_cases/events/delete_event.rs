use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::ports::event_repository::EventRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;

pub struct DeleteEvent<'a, R, S>
where
    R: EventRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

impl<'a, R, S> DeleteEvent<'a, R, S>
where
    R: EventRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    /// Removes the image first, then the record. The two stores are not
    /// transactional: an image removal is never undone if the record
    /// removal fails afterwards.
    pub async fn execute(&self, id: Uuid) -> Result<(), AppError> {
        let event = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if let Some(url) = event.image_url.as_deref() {
            if let Err(err) = self.storage.delete_image(url).await {
                tracing::warn!(error = ?err, event_id = %id, url, "image_delete_failed");
            }
        }

        if self.repo.delete(id).await? {
            tracing::info!(event_id = %id, "event_deleted");
            Ok(())
        } else {
            Err(AppError::internal("Failed to delete event"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::event::NewEvent;
    use crate::test_support::{CallLog, InMemoryEventRepository, InMemoryImageStorage};

    async fn seeded(log: &CallLog, image_url: Option<&str>) -> (InMemoryEventRepository, Uuid) {
        let repo = InMemoryEventRepository::with_log(log.clone());
        let event = repo
            .create(&NewEvent {
                title: "Expo".into(),
                description: String::new(),
                date: "2025-01-01".into(),
                category: String::new(),
                image_url: image_url.map(str::to_string),
            })
            .await
            .unwrap();
        (repo, event.id)
    }

    #[tokio::test]
    async fn removes_image_before_record() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, Some("mem://images/a.png")).await;
        let storage = InMemoryImageStorage::with_log(log.clone());
        let uc = DeleteEvent {
            repo: &repo,
            storage: &storage,
        };
        uc.execute(id).await.unwrap();
        assert_eq!(
            log.entries_matching("delete"),
            vec!["delete_image mem://images/a.png".to_string(), format!("delete_event {id}")]
        );
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn record_failure_after_image_removal_is_reported() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, Some("mem://images/b.png")).await;
        repo.fail_deletes();
        let storage = InMemoryImageStorage::with_log(log.clone());
        let uc = DeleteEvent {
            repo: &repo,
            storage: &storage,
        };
        let err = uc.execute(id).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(log.entries_matching("delete_image").len(), 1);
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn image_removal_failure_still_removes_record() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, Some("mem://images/c.png")).await;
        let storage = InMemoryImageStorage::with_log(log.clone());
        storage.fail_deletes();
        let uc = DeleteEvent {
            repo: &repo,
            storage: &storage,
        };
        uc.execute(id).await.unwrap();
        assert_eq!(log.entries_matching("delete_event").len(), 1);
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn unknown_event_is_not_found() {
        let repo = InMemoryEventRepository::default();
        let storage = InMemoryImageStorage::default();
        let uc = DeleteEvent {
            repo: &repo,
            storage: &storage,
        };
        let err = uc.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Event not found"));
    }
}

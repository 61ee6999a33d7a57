use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::ports::faculty_repository::FacultyRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;

pub struct DeleteFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub repo: &'a R,
    pub storage: &'a S,
}

impl<'a, R, S> DeleteFaculty<'a, R, S>
where
    R: FacultyRepository + ?Sized,
    S: ImageStoragePort + ?Sized,
{
    pub async fn execute(&self, id: Uuid) -> Result<(), AppError> {
        let member = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Faculty not found"))?;

        if let Some(url) = member.image_url.as_deref() {
            if let Err(err) = self.storage.delete_image(url).await {
                tracing::warn!(error = ?err, faculty_id = %id, url, "image_delete_failed");
            }
        }

        if self.repo.delete(id).await? {
            tracing::info!(faculty_id = %id, "faculty_deleted");
            Ok(())
        } else {
            Err(AppError::internal("Failed to delete faculty"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::faculty::member::NewFaculty;
    use crate::test_support::{CallLog, InMemoryFacultyRepository, InMemoryImageStorage};

    async fn seeded(log: &CallLog, image_url: Option<&str>) -> (InMemoryFacultyRepository, Uuid) {
        let repo = InMemoryFacultyRepository::with_log(log.clone());
        let member = repo
            .create(&NewFaculty {
                name: "Dr. Iyer".into(),
                designation: "Lecturer".into(),
                department: "EEE".into(),
                email: String::new(),
                phone: String::new(),
                specialization: String::new(),
                image_url: image_url.map(str::to_string),
            })
            .await
            .unwrap();
        (repo, member.id)
    }

    #[tokio::test]
    async fn removes_image_before_record() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, Some("mem://images/iyer.jpg")).await;
        let storage = InMemoryImageStorage::with_log(log.clone());
        let uc = DeleteFaculty {
            repo: &repo,
            storage: &storage,
        };
        uc.execute(id).await.unwrap();
        assert_eq!(
            log.entries_matching("delete"),
            vec!["delete_image mem://images/iyer.jpg".to_string(), format!("delete_faculty {id}")]
        );
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn image_removal_failure_still_removes_record() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, Some("mem://images/iyer.jpg")).await;
        let storage = InMemoryImageStorage::with_log(log.clone());
        storage.fail_deletes();
        let uc = DeleteFaculty {
            repo: &repo,
            storage: &storage,
        };
        uc.execute(id).await.unwrap();
        assert_eq!(log.entries_matching("delete_image").len(), 1);
        assert!(repo.all().is_empty());
    }

    #[tokio::test]
    async fn member_without_image_skips_storage() {
        let log = CallLog::default();
        let (repo, id) = seeded(&log, None).await;
        let storage = InMemoryImageStorage::with_log(log.clone());
        let uc = DeleteFaculty {
            repo: &repo,
            storage: &storage,
        };
        uc.execute(id).await.unwrap();
        assert!(log.entries_matching("delete_image").is_empty());
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let repo = InMemoryFacultyRepository::default();
        let storage = InMemoryImageStorage::default();
        let uc = DeleteFaculty {
            repo: &repo,
            storage: &storage,
        };
        let err = uc.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Faculty not found"));
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::faculty::member::{Faculty, FacultyChanges, NewFaculty};

#[async_trait]
pub trait FacultyRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Faculty>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Faculty>>;

    async fn create(&self, member: &NewFaculty) -> anyhow::Result<Faculty>;

    // Returns None if no member has this id
    async fn update(&self, id: Uuid, changes: &FacultyChanges) -> anyhow::Result<Option<Faculty>>;

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

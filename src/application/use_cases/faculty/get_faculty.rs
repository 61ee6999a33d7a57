use uuid::Uuid;

use crate::application::ports::faculty_repository::FacultyRepository;
use crate::domain::faculty::member::Faculty;

pub struct GetFaculty<'a, R: FacultyRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FacultyRepository + ?Sized> GetFaculty<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Faculty>> {
        self.repo.get_by_id(id).await
    }
}

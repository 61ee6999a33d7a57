use crate::application::ports::faculty_repository::FacultyRepository;
use crate::domain::faculty::member::Faculty;

pub struct ListFaculty<'a, R: FacultyRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: FacultyRepository + ?Sized> ListFaculty<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Faculty>> {
        self.repo.list().await
    }
}

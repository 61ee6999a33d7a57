pub mod event_repository_sqlx;
pub mod faculty_repository_sqlx;

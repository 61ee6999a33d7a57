pub mod event_repository;
pub mod faculty_repository;
pub mod image_storage_port;

pub mod admin;
pub mod events;
pub mod faculty;
pub mod images;

pub mod events;
pub mod faculty;
pub mod images;

pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod list_events;

pub mod create_faculty;
pub mod delete_faculty;
pub mod get_faculty;
pub mod list_faculty;
pub mod update_faculty;

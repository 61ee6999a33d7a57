pub mod admin;
pub mod error;
pub mod events;
pub mod faculty;
pub mod form;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod router;
pub mod session;

// Module layout (Clean Architecture style)
// - bootstrap: configuration and service wiring
// - infrastructure: Postgres and image storage adapters
// - presentation: HTTP handlers, admin pages and routing
// - application: use cases and the ports they depend on
// - domain: events, faculty and image rules

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::events::event::{Event, NewEvent};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<Event>>;

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Event>>;

    async fn create(&self, event: &NewEvent) -> anyhow::Result<Event>;

    // true if a row was removed
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}

use uuid::Uuid;

use crate::application::ports::event_repository::EventRepository;
use crate::domain::events::event::Event;

pub struct GetEvent<'a, R: EventRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EventRepository + ?Sized> GetEvent<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Event>> {
        self.repo.get_by_id(id).await
    }
}

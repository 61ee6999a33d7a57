use crate::application::ports::event_repository::EventRepository;
use crate::domain::events::event::Event;

pub struct ListEvents<'a, R: EventRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EventRepository + ?Sized> ListEvents<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Event>> {
        self.repo.list().await
    }
}

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::event_repository::EventRepository;
use crate::domain::events::event::{Event, NewEvent};
use crate::infrastructure::db::PgPool;

pub struct SqlxEventRepository {
    pub pool: PgPool,
}

impl SqlxEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_event(r: PgRow) -> Event {
    Event {
        id: r.get("id"),
        title: r.get("title"),
        description: r.get("description"),
        date: r.get("date"),
        category: r.get("category"),
        image_url: r.get("image_url"),
        created_at: r.get("created_at"),
    }
}

#[async_trait]
impl EventRepository for SqlxEventRepository {
    async fn list(&self) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, date, category, image_url, created_at
               FROM events
               ORDER BY date DESC, created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_event).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Event>> {
        let row = sqlx::query(
            r#"SELECT id, title, description, date, category, image_url, created_at
               FROM events WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_event))
    }

    async fn create(&self, event: &NewEvent) -> anyhow::Result<Event> {
        let row = sqlx::query(
            r#"INSERT INTO events (title, description, date, category, image_url)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, title, description, date, category, image_url, created_at"#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.category)
        .bind(event.image_url.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(map_event(row))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

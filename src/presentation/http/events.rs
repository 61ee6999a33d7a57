use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::error::AppError;
use crate::application::use_cases::events::create_event::CreateEvent;
use crate::application::use_cases::events::delete_event::DeleteEvent;
use crate::application::use_cases::events::get_event::GetEvent;
use crate::application::use_cases::events::list_events::ListEvents;
use crate::bootstrap::app_context::AppContext;
use crate::domain::events::event::{Event, NewEvent};
use crate::presentation::http::error::{ErrorBody, MessageBody, parse_id};
use crate::presentation::http::form::FormPayload;

#[derive(Debug, Serialize, ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            date: e.date,
            category: e.category,
            image_url: e.image_url,
            created_at: e.created_at,
        }
    }
}

/// Fields of `POST /api/events`.
#[derive(Debug, Validate)]
pub struct CreateEventForm {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub date: Option<String>,
    pub category: Option<String>,
}

impl CreateEventForm {
    pub fn from_payload(payload: &mut FormPayload) -> Self {
        Self {
            title: payload.take("title"),
            description: payload.take("description"),
            date: payload.take("date"),
            category: payload.take("category"),
        }
    }

    pub fn into_new_event(self) -> Result<NewEvent, AppError> {
        let missing = || AppError::bad_request("Title and date are required");
        self.validate().map_err(|_| missing())?;
        let (Some(title), Some(date)) = (self.title, self.date) else {
            return Err(missing());
        };
        Ok(NewEvent {
            title,
            description: self.description.unwrap_or_default(),
            date,
            category: self.category.unwrap_or_default(),
            image_url: None,
        })
    }
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreateEventMultipart {
    title: String,
    description: Option<String>,
    /// Event date as entered (e.g. `2025-03-14`)
    date: String,
    category: Option<String>,
    /// png, jpg, jpeg, gif or webp; other files are ignored
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<String>,
}

#[utoipa::path(get, path = "/api/events", tag = "Events",
    responses((status = 200, body = [EventResponse]), (status = 500, body = ErrorBody)))]
pub async fn list_events(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let repo = ctx.event_repo();
    let uc = ListEvents {
        repo: repo.as_ref(),
    };
    let events = uc.execute().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

#[utoipa::path(get, path = "/api/events/{id}", tag = "Events",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, body = EventResponse),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn get_event(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let not_found = || AppError::not_found("Event not found");
    let id = parse_id(&id).ok_or_else(not_found)?;
    let repo = ctx.event_repo();
    let uc = GetEvent {
        repo: repo.as_ref(),
    };
    let event = uc.execute(id).await?.ok_or_else(not_found)?;
    Ok(Json(event.into()))
}

#[utoipa::path(post, path = "/api/events", tag = "Events",
    request_body(content = CreateEventMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = EventResponse),
        (status = 400, description = "Title or date missing", body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn create_event(
    State(ctx): State<AppContext>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<EventResponse>), AppError> {
    let new_event = CreateEventForm::from_payload(&mut payload).into_new_event()?;
    let repo = ctx.event_repo();
    let storage = ctx.image_storage();
    let uc = CreateEvent {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    let event = uc.execute(new_event, payload.image.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

#[utoipa::path(delete, path = "/api/events/{id}", tag = "Events",
    params(("id" = String, Path, description = "Event ID")),
    responses(
        (status = 200, body = MessageBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn delete_event(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Event not found"))?;
    let repo = ctx.event_repo();
    let storage = ctx.image_storage();
    let uc = DeleteEvent {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    uc.execute(id).await?;
    Ok(Json(MessageBody {
        message: "Event deleted successfully".into(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", get(get_event).delete(delete_event))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: Option<&str>, date: Option<&str>) -> CreateEventForm {
        CreateEventForm {
            title: title.map(str::to_string),
            description: None,
            date: date.map(str::to_string),
            category: None,
        }
    }

    #[test]
    fn title_and_date_are_required() {
        for f in [
            form(None, Some("2025-01-01")),
            form(Some("Expo"), None),
            form(Some(""), Some("2025-01-01")),
            form(Some("Expo"), Some("")),
        ] {
            let err = f.into_new_event().unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m == "Title and date are required"));
        }
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let event = form(Some("Expo"), Some("2025-01-01"))
            .into_new_event()
            .unwrap();
        assert_eq!(event.description, "");
        assert_eq!(event.category, "");
        assert!(event.image_url.is_none());
    }
}

use utoipa::OpenApi;

use crate::presentation::http::{error, events, faculty, health};

#[derive(OpenApi)]
#[openapi(
    paths(
        events::list_events,
        events::get_event,
        events::create_event,
        events::delete_event,
        faculty::list_faculty,
        faculty::get_faculty,
        faculty::create_faculty,
        faculty::update_faculty,
        faculty::delete_faculty,
        health::health,
    ),
    components(schemas(
        events::EventResponse,
        events::CreateEventMultipart,
        faculty::FacultyResponse,
        faculty::FacultyMultipart,
        error::ErrorBody,
        error::MessageBody,
        health::HealthResp,
    )),
    tags(
        (name = "Events", description = "Event records"),
        (name = "Faculty", description = "Faculty records"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

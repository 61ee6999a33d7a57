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
use crate::application::use_cases::faculty::create_faculty::CreateFaculty;
use crate::application::use_cases::faculty::delete_faculty::DeleteFaculty;
use crate::application::use_cases::faculty::get_faculty::GetFaculty;
use crate::application::use_cases::faculty::list_faculty::ListFaculty;
use crate::application::use_cases::faculty::update_faculty::UpdateFaculty;
use crate::application::use_cases::images::store_image::StoreImage;
use crate::bootstrap::app_context::AppContext;
use crate::domain::faculty::member::{Faculty, FacultyChanges, NewFaculty};
use crate::presentation::http::error::{ErrorBody, MessageBody, parse_id};
use crate::presentation::http::form::FormPayload;

#[derive(Debug, Serialize, ToSchema)]
pub struct FacultyResponse {
    pub id: Uuid,
    pub name: String,
    pub designation: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Faculty> for FacultyResponse {
    fn from(f: Faculty) -> Self {
        Self {
            id: f.id,
            name: f.name,
            designation: f.designation,
            department: f.department,
            email: f.email,
            phone: f.phone,
            specialization: f.specialization,
            image_url: f.image_url,
            created_at: f.created_at,
        }
    }
}

/// Fields of `POST /api/faculty`.
#[derive(Debug, Validate)]
pub struct CreateFacultyForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub designation: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
}

impl CreateFacultyForm {
    pub fn from_payload(payload: &mut FormPayload) -> Self {
        Self {
            name: payload.take("name"),
            designation: payload.take("designation"),
            department: payload.take("department"),
            email: payload.take("email"),
            phone: payload.take("phone"),
            specialization: payload.take("specialization"),
        }
    }

    pub fn into_new_faculty(self) -> Result<NewFaculty, AppError> {
        let missing = || AppError::bad_request("Name and designation are required");
        self.validate().map_err(|_| missing())?;
        let (Some(name), Some(designation)) = (self.name, self.designation) else {
            return Err(missing());
        };
        Ok(NewFaculty {
            name,
            designation,
            department: self.department.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            specialization: self.specialization.unwrap_or_default(),
            image_url: None,
        })
    }
}

/// Fields of `PUT /api/faculty/{id}`; every field is optional.
#[derive(Debug, Default)]
pub struct UpdateFacultyForm {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
}

impl UpdateFacultyForm {
    pub fn from_payload(payload: &mut FormPayload) -> Self {
        Self {
            name: payload.take("name"),
            designation: payload.take("designation"),
            department: payload.take("department"),
            email: payload.take("email"),
            phone: payload.take("phone"),
            specialization: payload.take("specialization"),
        }
    }

    pub fn into_changes(self) -> FacultyChanges {
        FacultyChanges {
            name: self.name,
            designation: self.designation,
            department: self.department,
            email: self.email,
            phone: self.phone,
            specialization: self.specialization,
            image_url: None,
        }
    }
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct FacultyMultipart {
    name: String,
    designation: String,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    specialization: Option<String>,
    /// png, jpg, jpeg, gif or webp; other files are ignored
    #[schema(value_type = Option<String>, format = Binary)]
    image: Option<String>,
}

#[utoipa::path(get, path = "/api/faculty", tag = "Faculty",
    responses((status = 200, body = [FacultyResponse]), (status = 500, body = ErrorBody)))]
pub async fn list_faculty(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<FacultyResponse>>, AppError> {
    let repo = ctx.faculty_repo();
    let uc = ListFaculty {
        repo: repo.as_ref(),
    };
    let members = uc.execute().await?;
    Ok(Json(members.into_iter().map(FacultyResponse::from).collect()))
}

#[utoipa::path(get, path = "/api/faculty/{id}", tag = "Faculty",
    params(("id" = String, Path, description = "Faculty ID")),
    responses(
        (status = 200, body = FacultyResponse),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn get_faculty(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<FacultyResponse>, AppError> {
    let not_found = || AppError::not_found("Faculty not found");
    let id = parse_id(&id).ok_or_else(not_found)?;
    let repo = ctx.faculty_repo();
    let uc = GetFaculty {
        repo: repo.as_ref(),
    };
    let member = uc.execute(id).await?.ok_or_else(not_found)?;
    Ok(Json(member.into()))
}

#[utoipa::path(post, path = "/api/faculty", tag = "Faculty",
    request_body(content = FacultyMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = FacultyResponse),
        (status = 400, description = "Name or designation missing", body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn create_faculty(
    State(ctx): State<AppContext>,
    mut payload: FormPayload,
) -> Result<(StatusCode, Json<FacultyResponse>), AppError> {
    let member = CreateFacultyForm::from_payload(&mut payload).into_new_faculty()?;
    let repo = ctx.faculty_repo();
    let storage = ctx.image_storage();
    let uc = CreateFaculty {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    let created = uc.execute(member, payload.image.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/api/faculty/{id}", tag = "Faculty",
    params(("id" = String, Path, description = "Faculty ID")),
    request_body(content = FacultyMultipart, content_type = "multipart/form-data"),
    responses((status = 200, body = FacultyResponse), (status = 500, body = ErrorBody)))]
pub async fn update_faculty(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    mut payload: FormPayload,
) -> Result<Json<FacultyResponse>, AppError> {
    let changes = UpdateFacultyForm::from_payload(&mut payload).into_changes();
    let repo = ctx.faculty_repo();
    let storage = ctx.image_storage();
    let Some(id) = parse_id(&id) else {
        // a malformed id names no record; the image is still stored first
        let images = StoreImage {
            storage: storage.as_ref(),
        };
        images.execute(payload.image.as_ref()).await?;
        return Err(AppError::internal("Failed to update faculty"));
    };
    let uc = UpdateFaculty {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    let updated = uc.execute(id, changes, payload.image.as_ref()).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(delete, path = "/api/faculty/{id}", tag = "Faculty",
    params(("id" = String, Path, description = "Faculty ID")),
    responses(
        (status = 200, body = MessageBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn delete_faculty(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Faculty not found"))?;
    let repo = ctx.faculty_repo();
    let storage = ctx.image_storage();
    let uc = DeleteFaculty {
        repo: repo.as_ref(),
        storage: storage.as_ref(),
    };
    uc.execute(id).await?;
    Ok(Json(MessageBody {
        message: "Faculty deleted successfully".into(),
    }))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/faculty", get(list_faculty).post(create_faculty))
        .route(
            "/faculty/:id",
            get(get_faculty).put(update_faculty).delete(delete_faculty),
        )
        .with_state(ctx)
}

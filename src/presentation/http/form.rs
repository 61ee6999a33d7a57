use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use crate::application::error::AppError;
use crate::domain::images::ImageUpload;

/// Name of the multipart part carrying the record image.
pub const IMAGE_FIELD: &str = "image";

/// Form fields plus the optional image part, read from either
/// `multipart/form-data` or `application/x-www-form-urlencoded`. Any other
/// content type yields an empty payload so that required-field checks
/// report what is missing.
#[derive(Debug, Default)]
pub struct FormPayload {
    pub fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl FormPayload {
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            read_multipart(multipart).await
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            Ok(Self {
                fields,
                image: None,
            })
        } else {
            Ok(Self::default())
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<FormPayload, AppError> {
    let mut payload = FormPayload::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if let Some(filename) = field.file_name().map(str::to_string) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            // first image part wins; other file parts are dropped
            if name == IMAGE_FIELD && payload.image.is_none() {
                payload.image = Some(ImageUpload {
                    filename,
                    bytes: data.to_vec(),
                });
            }
            continue;
        }
        let text = field
            .text()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        payload.fields.entry(name).or_insert(text);
    }
    Ok(payload)
}

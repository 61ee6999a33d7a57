use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::response::Redirect;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

pub const SESSION_COOKIE: &str = "admin_session";
pub const LOGIN_PATH: &str = "/admin/login";

/// Payload of the signed session cookie. There is no `exp`: an admin
/// session lasts until logout.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
}

pub fn issue_session_token(cfg: &Config) -> anyhow::Result<String> {
    let claims = SessionClaims {
        sub: cfg.admin_username.clone(),
        iat: chrono::Utc::now().timestamp(),
    };
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(cfg.secret_key.as_bytes()),
    )?;
    Ok(token)
}

pub fn validate_session_token(cfg: &Config, token: &str) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    jsonwebtoken::decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(cfg.secret_key.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.sub == cfg.admin_username)
    .unwrap_or(false)
}

pub fn is_authenticated(cfg: &Config, headers: &HeaderMap) -> bool {
    headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .filter_map(|h| get_cookie(h, SESSION_COOKIE))
        .any(|token| validate_session_token(cfg, &token))
}

/// Guard for admin-only routes: anonymous callers are sent to the login page.
pub struct AdminSession;

#[axum::async_trait]
impl FromRequestParts<AppContext> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        if is_authenticated(&ctx.cfg, &parts.headers) {
            Ok(AdminSession)
        } else {
            Err(Redirect::to(LOGIN_PATH))
        }
    }
}

// --- Cookie helpers ---

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

pub fn session_cookie(token: &str, secure: bool) -> String {
    // No Max-Age: the browser keeps it for the session, the server never expires it
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly{}; Path=/; SameSite=Lax",
        SESSION_COOKIE, token, secure_attr
    )
}

pub fn clear_session_cookie(secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}=; HttpOnly{}; Path=/; Max-Age=0; SameSite=Lax",
        SESSION_COOKIE, secure_attr
    )
}

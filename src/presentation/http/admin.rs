use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::application::use_cases::admin::login::{AdminLogin, LoginAttempt};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::form::FormPayload;
use crate::presentation::http::pages;
use crate::presentation::http::session::{
    AdminSession, LOGIN_PATH, clear_session_cookie, is_authenticated, issue_session_token,
    session_cookie,
};

const ADMIN_PATH: &str = "/admin";
const LOGIN_FAILED: &str = "Invalid username or password. Please try again.";

pub async fn login_page(State(ctx): State<AppContext>, headers: HeaderMap) -> Response {
    if is_authenticated(&ctx.cfg, &headers) {
        return Redirect::to(ADMIN_PATH).into_response();
    }
    Html(pages::login_page(None)).into_response()
}

pub async fn login(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    mut payload: FormPayload,
) -> Response {
    if is_authenticated(&ctx.cfg, &headers) {
        return Redirect::to(ADMIN_PATH).into_response();
    }

    let attempt = LoginAttempt {
        username: payload.take("username").unwrap_or_default(),
        password: payload.take("password").unwrap_or_default(),
    };
    let uc = AdminLogin {
        username: &ctx.cfg.admin_username,
        password: &ctx.cfg.admin_password,
    };
    if !uc.execute(&attempt) {
        tracing::warn!(username = %attempt.username, "admin_login_failed");
        return Html(pages::login_page(Some(LOGIN_FAILED))).into_response();
    }

    let token = match issue_session_token(&ctx.cfg) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = ?e, "session_token_failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    tracing::info!(username = %attempt.username, "admin_login_succeeded");
    let cookie = session_cookie(&token, ctx.cfg.secure_cookies());
    ([(SET_COOKIE, cookie)], Redirect::to(ADMIN_PATH)).into_response()
}

pub async fn logout(State(ctx): State<AppContext>) -> Response {
    let cookie = clear_session_cookie(ctx.cfg.secure_cookies());
    ([(SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH)).into_response()
}

pub async fn admin_page(State(ctx): State<AppContext>, _session: AdminSession) -> Html<String> {
    Html(pages::admin_page(&ctx.cfg.admin_username))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(ADMIN_PATH, get(admin_page))
        .route(LOGIN_PATH, get(login_page).post(login))
        .route("/admin/logout", get(logout))
        .with_state(ctx)
}

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::StorageBackend;
use crate::infrastructure::storage::fs::UPLOADS_ROUTE;
use crate::presentation::http::openapi::ApiDoc;
use crate::presentation::http::{admin, events, faculty, health};

/// Cross-origin access is limited to the JSON API and the configured origins.
fn api_cors(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

// `*` anywhere in the list opens the API to every origin
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "cors_origin_invalid");
                None
            }
        })
        .collect();
    AllowOrigin::list(allowed)
}

pub fn build_router(ctx: AppContext) -> Router {
    let cfg = ctx.cfg.clone();

    let api = Router::new()
        .merge(events::routes(ctx.clone()))
        .merge(faculty::routes(ctx.clone()))
        .layer(api_cors(&cfg.cors_origins));

    let mut app = Router::new()
        .nest("/api", api)
        .merge(health::routes())
        .merge(admin::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));

    if cfg.storage_backend == StorageBackend::Filesystem {
        app = app.nest_service(UPLOADS_ROUTE, ServeDir::new(&cfg.storage_root));
    }

    app.layer(DefaultBodyLimit::max(cfg.upload_max_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{errors::ApiError, openapi::ApiDoc, state::AppState};

pub mod authors;
pub mod books;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Ids that do not parse as integers can never match a record.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub(crate) fn not_found(kind: &str, raw: &str) -> ApiError {
    ApiError::NotFound(format!("{kind} not found: {raw}"))
}

/// Path id as an integer, or the 404 a missing record would get.
pub(crate) fn path_id(kind: &str, raw: &str) -> Result<i32, ApiError> {
    parse_id(raw).ok_or_else(|| not_found(kind, raw))
}

/// Required integer query parameter; missing, blank or non-integer is a 400.
pub(crate) fn min_param(name: &str, raw: Option<&str>) -> Result<i32, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("The {name} parameter is required")))?;
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("{name} must be an integer: {raw}")))
}

/// Build the full application router: catalog API, health probe, docs and static assets.
pub fn build_router(state: AppState, cors: CorsLayer, public_dir: &str) -> Router {
    let api = Router::new()
        .route("/api/authors", get(authors::list).post(authors::create))
        .route("/api/authors/filter/by-birth-year", get(authors::filter_by_birth_year))
        .route("/api/authors/:id", get(authors::get).put(authors::update).delete(authors::delete))
        .route("/api/books", get(books::list).post(books::create))
        .route("/api/books/filter/by-pages", get(books::filter_by_pages))
        .route("/api/books/:id", get(books::get).put(books::update).delete(books::delete));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged as errors
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

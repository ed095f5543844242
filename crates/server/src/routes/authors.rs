use axum::{extract::{rejection::JsonRejection, Path, Query, State}, http::StatusCode, Json};
use common::types::Envelope;
use models::author;
use serde::Deserialize;
use service::catalog::domain::AuthorPayload;
use tracing::info;

use super::{min_param, not_found, path_id};
use crate::{errors::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct BirthYearQuery {
    #[serde(rename = "minYear")]
    pub min_year: Option<String>,
}

#[utoipa::path(
    get, path = "/api/authors", tag = "authors", operation_id = "list_authors",
    responses(
        (status = 200, description = "Authors retrieved"),
        (status = 500, description = "List failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<author::Model>>>, ApiError> {
    let rows = state.authors.list_all().await.map_err(|e| ApiError::internal("Failed to retrieve authors", e))?;
    info!(count = rows.len(), "list authors");
    Ok(Json(Envelope::success(rows, "Authors retrieved successfully")))
}

#[utoipa::path(
    post, path = "/api/authors", tag = "authors", operation_id = "create_author",
    request_body = crate::openapi::AuthorPayloadDoc,
    responses(
        (status = 201, description = "Author created"),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Create failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AuthorPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<author::Model>>), ApiError> {
    let Json(payload) = payload?;
    let created = state.authors.create(payload).await.map_err(|e| ApiError::internal("Failed to create author", e))?;
    info!(id = created.id, "created author");
    Ok((StatusCode::CREATED, Json(Envelope::success(created, "Author created successfully"))))
}

#[utoipa::path(
    get, path = "/api/authors/{id}", tag = "authors", operation_id = "get_author",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author retrieved"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Lookup failed")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Envelope<author::Model>>, ApiError> {
    let id = path_id("Author", &raw)?;
    match state.authors.get_by_id(id).await.map_err(|e| ApiError::internal("Failed to retrieve author", e))? {
        Some(a) => Ok(Json(Envelope::success(a, "Author retrieved successfully"))),
        None => Err(not_found("Author", &raw)),
    }
}

#[utoipa::path(
    put, path = "/api/authors/{id}", tag = "authors", operation_id = "update_author",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = crate::openapi::AuthorPayloadDoc,
    responses(
        (status = 204, description = "Updated, including when nothing changed"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Update failed")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<AuthorPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("Author", &raw)?;
    let Json(payload) = payload?;
    match state.authors.update(id, payload).await.map_err(|e| ApiError::internal("Failed to update author", e))? {
        0 => Err(not_found("Author", &raw)),
        _ => { info!(id, "updated author"); Ok(StatusCode::NO_CONTENT) }
    }
}

#[utoipa::path(
    delete, path = "/api/authors/{id}", tag = "authors", operation_id = "delete_author",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Delete failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let id = path_id("Author", &raw)?;
    match state.authors.delete_by_id(id).await.map_err(|e| ApiError::internal("Failed to delete author", e))? {
        0 => Err(not_found("Author", &raw)),
        _ => { info!(id, "deleted author"); Ok(StatusCode::NO_CONTENT) }
    }
}

#[utoipa::path(
    get, path = "/api/authors/filter/by-birth-year", tag = "authors", operation_id = "filter_authors_by_birth_year",
    params(("minYear" = i32, Query, description = "Earliest birth year, inclusive")),
    responses(
        (status = 200, description = "Authors born on or after January 1 of minYear, oldest first"),
        (status = 400, description = "minYear missing or not an integer"),
        (status = 500, description = "Filter failed")
    )
)]
pub async fn filter_by_birth_year(
    State(state): State<AppState>,
    Query(q): Query<BirthYearQuery>,
) -> Result<Json<Envelope<Vec<author::Model>>>, ApiError> {
    let min_year = min_param("minYear", q.min_year.as_deref())?;
    let rows = state.authors.filter_by_range(min_year).await.map_err(|e| ApiError::internal("Failed to filter authors", e))?;
    Ok(Json(Envelope::success(rows, "Authors filtered by birth year")))
}

use axum::{extract::{rejection::JsonRejection, Path, Query, State}, http::StatusCode, Json};
use common::types::Envelope;
use models::book;
use serde::Deserialize;
use service::catalog::domain::BookPayload;
use tracing::info;

use super::{min_param, not_found, path_id};
use crate::{errors::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    #[serde(rename = "minPages")]
    pub min_pages: Option<String>,
}

#[utoipa::path(
    get, path = "/api/books", tag = "books", operation_id = "list_books",
    responses(
        (status = 200, description = "Books retrieved"),
        (status = 500, description = "List failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<book::Model>>>, ApiError> {
    let rows = state.books.list_all().await.map_err(|e| ApiError::internal("Failed to retrieve books", e))?;
    info!(count = rows.len(), "list books");
    Ok(Json(Envelope::success(rows, "Books retrieved successfully")))
}

#[utoipa::path(
    post, path = "/api/books", tag = "books", operation_id = "create_book",
    request_body = crate::openapi::BookPayloadDoc,
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Create failed")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<book::Model>>), ApiError> {
    let Json(payload) = payload?;
    let created = state.books.create(payload).await.map_err(|e| ApiError::internal("Failed to create book", e))?;
    info!(id = created.id, "created book");
    Ok((StatusCode::CREATED, Json(Envelope::success(created, "Book created successfully"))))
}

#[utoipa::path(
    get, path = "/api/books/{id}", tag = "books", operation_id = "get_book",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book retrieved"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Lookup failed")
    )
)]
pub async fn get(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Json<Envelope<book::Model>>, ApiError> {
    let id = path_id("Book", &raw)?;
    match state.books.get_by_id(id).await.map_err(|e| ApiError::internal("Failed to retrieve book", e))? {
        Some(b) => Ok(Json(Envelope::success(b, "Book retrieved successfully"))),
        None => Err(not_found("Book", &raw)),
    }
}

#[utoipa::path(
    put, path = "/api/books/{id}", tag = "books", operation_id = "update_book",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = crate::openapi::BookPayloadDoc,
    responses(
        (status = 204, description = "Updated, including when nothing changed"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Update failed")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id("Book", &raw)?;
    let Json(payload) = payload?;
    match state.books.update(id, payload).await.map_err(|e| ApiError::internal("Failed to update book", e))? {
        0 => Err(not_found("Book", &raw)),
        _ => { info!(id, "updated book"); Ok(StatusCode::NO_CONTENT) }
    }
}

#[utoipa::path(
    delete, path = "/api/books/{id}", tag = "books", operation_id = "delete_book",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Delete failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(raw): Path<String>) -> Result<StatusCode, ApiError> {
    let id = path_id("Book", &raw)?;
    match state.books.delete_by_id(id).await.map_err(|e| ApiError::internal("Failed to delete book", e))? {
        0 => Err(not_found("Book", &raw)),
        _ => { info!(id, "deleted book"); Ok(StatusCode::NO_CONTENT) }
    }
}

#[utoipa::path(
    get, path = "/api/books/filter/by-pages", tag = "books", operation_id = "filter_books_by_pages",
    params(("minPages" = i32, Query, description = "Minimum page count, inclusive")),
    responses(
        (status = 200, description = "Books with at least minPages pages, shortest first"),
        (status = 400, description = "minPages missing or not an integer"),
        (status = 500, description = "Filter failed")
    )
)]
pub async fn filter_by_pages(
    State(state): State<AppState>,
    Query(q): Query<PagesQuery>,
) -> Result<Json<Envelope<Vec<book::Model>>>, ApiError> {
    let min_pages = min_param("minPages", q.min_pages.as_deref())?;
    let rows = state.books.filter_by_range(min_pages).await.map_err(|e| ApiError::internal("Failed to filter books", e))?;
    Ok(Json(Envelope::success(rows, "Books filtered by page count")))
}

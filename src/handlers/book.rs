//! Book CRUD handlers: get one, list, create, update, delete.

use crate::error::AppError;
use crate::model::{BookUpdate, NewBook};
use crate::response::{created, ok, ok_empty};
use crate::state::AppState;
use crate::store::StoreError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use std::future::Future;
use tracing::Instrument;
use uuid::Uuid;

fn parse_id(operation: &'static str, value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|source| AppError::InvalidId {
        operation,
        value: value.to_string(),
        source,
    })
}

fn body<T>(operation: &'static str, payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(v)| v)
        .map_err(|rejection| AppError::InvalidBody {
            operation,
            reason: rejection.body_text(),
        })
}

fn lookup_err(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Lookup { operation, source }
}

fn store_err(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Store { operation, source }
}

/// Run a handler body inside a request span under the state's span and log its failure.
async fn traced<T, F>(state: &AppState, operation: &'static str, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let span = tracing::info_span!(parent: &state.span, "request", operation);
    async move {
        let res = fut.await;
        if let Err(e) = &res {
            e.log();
        }
        res
    }
    .instrument(span)
    .await
}

/// GET {base}/book/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "get_book";
    traced(&state, OP, async {
        let id = parse_id(OP, &id)?;
        let book = state.books.get_by_id(id).await.map_err(lookup_err(OP))?;
        Ok(ok(book))
    })
    .await
}

/// GET {base}/books
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "list_books";
    traced(&state, OP, async {
        let books = state.books.get_all().await.map_err(store_err(OP))?;
        Ok(ok(books))
    })
    .await
}

/// POST {base}/book/create
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "create_book";
    traced(&state, OP, async {
        let new_book = body(OP, payload)?;
        let book = state.books.add(new_book).await.map_err(store_err(OP))?;
        tracing::info!(id = %book.id, "book created");
        Ok(created(book))
    })
    .await
}

/// PATCH {base}/book/update
pub async fn update_book(
    State(state): State<AppState>,
    payload: Result<Json<BookUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "update_book";
    traced(&state, OP, async {
        let update = body(OP, payload)?;
        let id = parse_id(OP, &update.id)?;
        state
            .books
            .update(update.into_patch(id))
            .await
            .map_err(store_err(OP))?;
        Ok(ok_empty())
    })
    .await
}

/// DELETE {base}/book/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    const OP: &str = "delete_book";
    traced(&state, OP, async {
        let id = parse_id(OP, &id)?;
        state.books.delete_by_id(id).await.map_err(store_err(OP))?;
        Ok(ok_empty())
    })
    .await
}

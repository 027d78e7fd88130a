//! Book CRUD routes. Static segments (`create`, `update`) take priority over `:id`.

use crate::handlers::book::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/book/create", post(create_book))
        .route("/book/update", patch(update_book))
        .route("/book/:id", get(get_book).delete(delete_book))
        .with_state(state)
}

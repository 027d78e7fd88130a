//! Router assembly.

pub mod book;
pub mod common;

pub use book::book_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected before reaching a handler.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: book routes under `base` (e.g. `/api`), common routes at the root.
pub fn app_router(base: &str, state: AppState) -> Router {
    let books = book_routes(state.clone());
    let base = base.trim_end_matches('/');
    let router = if base.is_empty() {
        Router::new().merge(books)
    } else {
        Router::new().nest(base, books)
    };
    router
        .merge(common_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

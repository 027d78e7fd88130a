//! Shared application state for all routes.

use crate::store::BookStore;
use std::sync::Arc;
use tracing::Span;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    /// Parent span for request logging; supplied by whoever builds the state.
    pub span: Span,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>, span: Span) -> Self {
        Self { books, span }
    }
}

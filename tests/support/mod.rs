//! Shared helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use books_api::{app_router, AppState, Book, BookPatch, BookStore, MemoryBookStore, NewBook, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn app_with(store: Arc<dyn BookStore>) -> Router {
    app_router("/api", AppState::new(store, tracing::Span::none()))
}

pub fn memory_app() -> (Router, Arc<MemoryBookStore>) {
    let store = Arc::new(MemoryBookStore::new());
    (app_with(store.clone()), store)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes)
}

pub fn json(bytes: &Bytes) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

/// What every call on `StubStore` fails with.
#[derive(Clone, Copy)]
pub enum Failure {
    NotFound,
    NoRowsAffected,
    NoChange,
    Db,
    Cancelled,
}

impl Failure {
    fn error(self, operation: &'static str) -> StoreError {
        match self {
            Failure::NotFound => StoreError::NotFound,
            Failure::NoRowsAffected => StoreError::NoRowsAffected,
            Failure::NoChange => StoreError::NoChange,
            Failure::Db => StoreError::Db(sqlx::Error::PoolTimedOut),
            Failure::Cancelled => StoreError::Cancelled {
                operation,
                after: std::time::Duration::from_millis(1),
            },
        }
    }
}

/// Store double that counts calls and fails every one of them.
pub struct StubStore {
    failure: Failure,
    calls: AtomicUsize,
}

impl StubStore {
    pub fn failing(failure: Failure) -> Arc<Self> {
        Arc::new(Self {
            failure,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self, operation: &'static str) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.failure.error(operation))
    }
}

#[async_trait]
impl BookStore for StubStore {
    async fn get_by_id(&self, _id: Uuid) -> Result<Book, StoreError> {
        self.fail("get_by_id")
    }

    async fn get_all(&self) -> Result<Vec<Book>, StoreError> {
        self.fail("get_all")
    }

    async fn add(&self, _book: NewBook) -> Result<Book, StoreError> {
        self.fail("add")
    }

    async fn update(&self, _patch: BookPatch) -> Result<(), StoreError> {
        self.fail("update")
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<(), StoreError> {
        self.fail("delete_by_id")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail("ping")
    }
}

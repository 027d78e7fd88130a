//! Storage gateway for books: the `BookStore` contract and its backends.

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

use crate::model::{Book, BookPatch, NewBook};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("book not found")]
    NotFound,
    /// Insert reported zero affected rows.
    #[error("no rows were affected by insert")]
    NoRowsAffected,
    /// Update or delete matched no row.
    #[error("no rows were affected")]
    NoChange,
    #[error("{operation} cancelled after {after:?}")]
    Cancelled {
        operation: &'static str,
        after: Duration,
    },
    #[error("decode: {0}")]
    Decode(String),
    #[error("database: {0}")]
    Db(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Db(other),
        }
    }
}

/// Book persistence. Handlers only see this trait, so any backend (or test
/// double) can sit behind `AppState`.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Book, StoreError>;

    /// Every stored book, in storage order. Empty table yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Assign a fresh id and insert. Returns the stored book.
    async fn add(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Overwrite the columns set in `patch`. `NoChange` when no row matched.
    async fn update(&self, patch: BookPatch) -> Result<(), StoreError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError>;

    /// Connectivity probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Run one storage call under `limit`. The future is dropped when the deadline
/// passes, which aborts the in-flight query.
pub(crate) async fn with_deadline<T, F>(
    operation: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => Err(StoreError::Cancelled {
            operation,
            after: limit,
        }),
    }
}

//! PostgreSQL book store (sqlx).

use super::{with_deadline, BookStore, StoreError};
use crate::model::{Book, BookPatch, BookRow, NewBook};
use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;
use tracing::{Instrument, Span};
use uuid::Uuid;

const SELECT_BY_ID: &str = "SELECT id, name, author, price FROM books WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name, author, price FROM books";
const INSERT: &str = "INSERT INTO books (id, name, author, price) VALUES ($1, $2, $3, $4)";
const UPDATE: &str = "UPDATE books SET name = COALESCE($1, name), author = COALESCE($2, author), price = COALESCE($3, price) WHERE id = $4";
const DELETE: &str = "DELETE FROM books WHERE id = $1";

pub struct PgBookStore {
    pool: PgPool,
    query_timeout: Duration,
    span: Span,
}

impl PgBookStore {
    /// `span` is the logging context every call and failure is recorded under.
    pub fn new(pool: PgPool, query_timeout: Duration, span: Span) -> Self {
        Self {
            pool,
            query_timeout,
            span,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn run<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let res = with_deadline(operation, self.query_timeout, fut)
            .instrument(self.span.clone())
            .await;
        if let Err(e) = &res {
            self.span.in_scope(|| match e {
                StoreError::NotFound | StoreError::NoChange => {
                    tracing::warn!(operation, error = %e, "storage call failed")
                }
                _ => tracing::error!(operation, error = %e, "storage call failed"),
            });
        }
        res
    }
}

fn to_book(row: BookRow) -> Result<Book, StoreError> {
    let id = row.id;
    Book::try_from(row).map_err(|e| StoreError::Decode(format!("book {}: price: {}", id, e)))
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Book, StoreError> {
        self.run("get_by_id", async {
            tracing::debug!(sql = %SELECT_BY_ID, %id, "query");
            let row: BookRow = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            to_book(row)
        })
        .await
    }

    async fn get_all(&self) -> Result<Vec<Book>, StoreError> {
        self.run("get_all", async {
            tracing::debug!(sql = %SELECT_ALL, "query");
            let rows: Vec<BookRow> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;
            rows.into_iter().map(to_book).collect()
        })
        .await
    }

    async fn add(&self, book: NewBook) -> Result<Book, StoreError> {
        let book = book.into_book(Uuid::new_v4());
        self.run("add", async move {
            tracing::debug!(sql = %INSERT, id = %book.id, "query");
            let res = sqlx::query(INSERT)
                .bind(book.id)
                .bind(&book.name)
                .bind(&book.author)
                .bind(i64::from(book.price))
                .execute(&self.pool)
                .await?;
            if res.rows_affected() == 0 {
                return Err(StoreError::NoRowsAffected);
            }
            Ok(book)
        })
        .await
    }

    async fn update(&self, patch: BookPatch) -> Result<(), StoreError> {
        self.run("update", async move {
            tracing::debug!(sql = %UPDATE, id = %patch.id, "query");
            let res = sqlx::query(UPDATE)
                .bind(patch.name)
                .bind(patch.author)
                .bind(patch.price.map(i64::from))
                .bind(patch.id)
                .execute(&self.pool)
                .await?;
            if res.rows_affected() == 0 {
                return Err(StoreError::NoChange);
            }
            Ok(())
        })
        .await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.run("delete_by_id", async {
            tracing::debug!(sql = %DELETE, %id, "query");
            let res = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
            if res.rows_affected() == 0 {
                return Err(StoreError::NoChange);
            }
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.run("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }
}

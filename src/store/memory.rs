//! In-process book store. Same contract as the PostgreSQL store; used for
//! tests and for running without a database.

use super::{BookStore, StoreError};
use crate::model::{Book, BookPatch, NewBook};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<HashMap<Uuid, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Book, StoreError> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn add(&self, book: NewBook) -> Result<Book, StoreError> {
        let book = book.into_book(Uuid::new_v4());
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(StoreError::NoRowsAffected);
        }
        books.insert(book.id, book.clone());
        Ok(book)
    }

    // A matched row counts as affected even if nothing changes, as in PostgreSQL.
    async fn update(&self, patch: BookPatch) -> Result<(), StoreError> {
        let mut books = self.books.write().await;
        let book = books.get_mut(&patch.id).ok_or(StoreError::NoChange)?;
        patch.apply(book);
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.books
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoChange)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            name: "Dune".into(),
            author: "Herbert".into(),
            price: 1999,
        }
    }

    #[tokio::test]
    async fn add_then_get_returns_equal_book() {
        let store = MemoryBookStore::new();
        let added = store.add(dune()).await.unwrap();
        assert_eq!(added.name, "Dune");
        assert_eq!(store.get_by_id(added.id).await.unwrap(), added);
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_empty() {
        let store = MemoryBookStore::new();
        assert!(store.get_all().await.unwrap().is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn duplicates_are_allowed() {
        let store = MemoryBookStore::new();
        let a = store.add(dune()).await.unwrap();
        let b = store.add(dune()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn update_keeps_unset_fields() {
        let store = MemoryBookStore::new();
        let added = store.add(dune()).await.unwrap();
        store
            .update(BookPatch {
                id: added.id,
                name: None,
                author: Some("New Author".into()),
                price: None,
            })
            .await
            .unwrap();
        let got = store.get_by_id(added.id).await.unwrap();
        assert_eq!(got.name, "Dune");
        assert_eq!(got.author, "New Author");
        assert_eq!(got.price, 1999);
    }

    #[tokio::test]
    async fn update_missing_id_is_no_change() {
        let store = MemoryBookStore::new();
        let res = store
            .update(BookPatch {
                id: Uuid::new_v4(),
                name: Some("x".into()),
                author: None,
                price: None,
            })
            .await;
        assert!(matches!(res, Err(StoreError::NoChange)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryBookStore::new();
        let added = store.add(dune()).await.unwrap();
        store.delete_by_id(added.id).await.unwrap();
        assert!(matches!(store.get_by_id(added.id).await, Err(StoreError::NotFound)));
        assert!(matches!(store.delete_by_id(added.id).await, Err(StoreError::NoChange)));
    }
}

//! Book resource: wire shapes, the internal update patch, and the storage row.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Decode JSON `null` as the type's zero value, so `null` reads like an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A stored book as returned to clients. `price` is capped at `u32::MAX`;
/// larger values are rejected when the request body is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub price: u32,
}

/// Create payload. Any `id` sent by the client is ignored; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewBook {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: u32,
}

impl NewBook {
    pub fn into_book(self, id: Uuid) -> Book {
        Book {
            id,
            name: self.name,
            author: self.author,
            price: self.price,
        }
    }
}

/// Update payload as sent on the wire. Empty strings and a zero price mean
/// "leave unchanged". The id stays a raw string so the handler can reject a
/// malformed one with its own status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookUpdate {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: u32,
}

impl BookUpdate {
    /// Convert the sentinel-valued payload into a patch for an already parsed id.
    pub fn into_patch(self, id: Uuid) -> BookPatch {
        BookPatch {
            id,
            name: non_empty(self.name),
            author: non_empty(self.author),
            price: (self.price != 0).then_some(self.price),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Columns to overwrite on update; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPatch {
    pub id: Uuid,
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<u32>,
}

impl BookPatch {
    pub fn apply(&self, book: &mut Book) {
        if let Some(name) = &self.name {
            book.name = name.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
    }
}

/// Row shape of the `books` table. `price` is BIGINT so every `u32` fits.
#[derive(Debug, sqlx::FromRow)]
pub struct BookRow {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    pub price: i64,
}

impl TryFrom<BookRow> for Book {
    type Error = std::num::TryFromIntError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        Ok(Book {
            id: row.id,
            name: row.name,
            author: row.author,
            price: u32::try_from(row.price)?,
        })
    }
}

//! Books API: CRUD over a single `book` resource backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Settings;
pub use error::{AppError, ConfigError, MigrationError};
pub use model::{Book, BookPatch, BookUpdate, NewBook};
pub use routes::{app_router, book_routes, common_routes};
pub use state::AppState;
pub use store::{BookStore, MemoryBookStore, PgBookStore, StoreError};

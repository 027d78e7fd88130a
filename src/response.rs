//! Success response helpers. Bodies are the bare resource, no envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// 200 with an empty body, for writes that return nothing.
pub fn ok_empty() -> StatusCode {
    StatusCode::OK
}

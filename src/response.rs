//! Success response shapes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of a successful create: the store-assigned id.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i32,
}

pub fn created(id: i32) -> (StatusCode, Json<Created>) {
    (StatusCode::CREATED, Json(Created { id }))
}

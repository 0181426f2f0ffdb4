//! Shared application state for all routes.

use sqlx::PgPool;

/// Handles passed to every handler. The pool is the only shared resource; it is built once at
/// startup and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}

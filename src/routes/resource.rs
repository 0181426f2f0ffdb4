//! Resource CRUD routes. The binding table is fixed: each resource gets the same five
//! operations, with body validation on POST and PUT through `ValidatedJson`.

use crate::handlers::{create, delete, list, read, update};
use crate::resources::{Movies, Resource, Users};
use crate::state::AppState;
use axum::{routing::get, Router};

fn resource_routes<R: Resource>(base: &str) -> Router<AppState> {
    Router::new()
        .route(base, get(list::<R>).post(create::<R>))
        .route(
            &format!("{}/:id", base),
            get(read::<R>).put(update::<R>).delete(delete::<R>),
        )
}

/// /api/users and /api/movies.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes::<Users>("/api/users"))
        .merge(resource_routes::<Movies>("/api/movies"))
        .with_state(state)
}

//! Resource CRUD handlers: list, read, create, update, delete. Generic over the resource.

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::resources::Resource;
use crate::response::created;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}

fn not_found<R: Resource>(id: i32) -> AppError {
    AppError::NotFound(format!("{} {}", R::NAME, id))
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Record>>, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    Ok(Json(rows))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<R::Record>, AppError> {
    let id = parse_id(&id_str)?;
    let row = CrudService::read::<R>(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<R>,
) -> Result<impl IntoResponse, AppError> {
    let id = CrudService::create::<R>(&state.pool, payload).await?;
    tracing::info!(resource = R::NAME, id, "created");
    Ok(created(id))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidatedJson(payload): ValidatedJson<R>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !CrudService::update::<R>(&state.pool, id, payload).await? {
        return Err(not_found::<R>(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !CrudService::delete::<R>(&state.pool, id).await? {
        return Err(not_found::<R>(id));
    }
    tracing::info!(resource = R::NAME, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("17").unwrap(), 17);
        assert_eq!(parse_id("0").unwrap(), 0);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::BadRequest(_))));
    }
}

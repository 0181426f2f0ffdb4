//! Body extractor that validates a JSON object against a resource's table before the handler runs.

use crate::error::AppError;
use crate::resources::Resource;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

/// Validated request body of resource `R`. Rejections: 400 for unparseable JSON, 422 for a body that
/// is not an object or misses, blanks or mistypes any required field.
pub struct ValidatedJson<R: Resource>(pub R::Payload);

#[async_trait]
impl<R, S> FromRequest<S> for ValidatedJson<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if let Err(e) = RequestValidator::validate_value(&body, R::TABLE) {
            tracing::warn!(resource = R::NAME, error = %e, "rejected request body");
            return Err(e);
        }

        let payload = serde_json::from_value::<R::Payload>(body).map_err(|e| {
            AppError::Validation(vec![crate::error::FieldError::new("body", e.to_string())])
        })?;
        Ok(ValidatedJson(payload))
    }
}

//! Validating extractors.
//!
//! `ValidatedJson<T>` and `ValidatedQuery<T>` deserialize like axum's `Json`
//! and `Query`, then run [`Validate`]. Malformed input and rule violations
//! both become `BackendError::Validation` (422).

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::Validate;

/// JSON body that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::validation("body", rejection.body_text())
        })?;

        value.validate().map_err(|e| {
            tracing::warn!("Request body failed validation: {}", e);
            BackendError::from(e)
        })?;

        Ok(Self(value))
    }
}

/// Query string that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected query string: {}", rejection.body_text());
                BackendError::validation("query", rejection.body_text())
            })?;

        value.validate().map_err(|e| {
            tracing::warn!("Query failed validation: {}", e);
            BackendError::from(e)
        })?;

        Ok(Self(value))
    }
}

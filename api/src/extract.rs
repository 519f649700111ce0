//! Request validation: JSON bodies, required fields, path ids and paging.
//!
//! Every rejection is an [`ApiError::BadRequest`], so malformed input always
//! produces the standard JSON error body instead of axum's plain-text one.

use crate::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use validator::Validate;

/// A request body that decoded to a JSON object.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected request body");
                ApiError::bad_request()
            })?;

        match value {
            Value::Object(map) => Ok(JsonBody(map)),
            _ => Err(ApiError::invalid("body must be a JSON object")),
        }
    }
}

impl JsonBody {
    /// Fails with the first of `fields` that is absent or `null`.
    pub fn require(self, fields: &[&str]) -> Result<Self, ApiError> {
        require_fields(&self.0, fields)?;
        Ok(self)
    }

    /// Deserializes the body into a typed request; a type mismatch is a 400.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.0)).map_err(ApiError::invalid)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// Returns `body` unchanged when every field in `fields` is present and non-null,
/// otherwise a 400 naming the first missing one in list order.
pub fn require_fields<'a>(
    body: &'a Map<String, Value>,
    fields: &[&str],
) -> Result<&'a Map<String, Value>, ApiError> {
    match fields
        .iter()
        .find(|field| body.get(**field).is_none_or(Value::is_null))
    {
        Some(missing) => Err(ApiError::missing_field(missing)),
        None => Ok(body),
    }
}

/// Integer `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid("id must be an integer"))?;
        Ok(PathId(id))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
}

/// The validated 1-based `?page=` parameter, defaulting to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub u64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid("page must be a positive integer"))?;
        query
            .validate()
            .map_err(|_| ApiError::invalid("page must be a positive integer"))?;
        Ok(Page(query.page.unwrap_or(1)))
    }
}

/// Accepts `2` as well as `"2"`; browser front-ends send select values as strings.
pub fn int_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => {
            T::try_from(n).map_err(|_| de::Error::custom(format!("integer {n} is out of range")))
        }
        Raw::Str(s) => s
            .trim()
            .parse::<T>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use crate::error::{ApiError, ApiResult};
use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON body is not an object")]
    NotAnObject,
}

/// A request body parsed as a JSON object, whatever the `Content-Type`.
///
/// Key presence is checked on the raw object so a key sent as `null` still
/// counts as present.
#[derive(Debug)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    pub fn parse(bytes: &[u8]) -> Result<Self, BodyError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(BodyError::NotAnObject),
        }
    }

    pub fn missing_key(&self, keys: &[&'static str]) -> Option<&'static str> {
        keys.iter().copied().find(|key| !self.0.contains_key(*key))
    }

    pub fn decode<T: DeserializeOwned>(self) -> Result<T, BodyError> {
        Ok(serde_json::from_value(Value::Object(self.0))?)
    }
}

/// App-wide fallback for unknown paths.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(ApiError::NotFound)
}

/// Per-resource fallback for methods a path does not serve.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(ApiError::MethodNotAllowed)
}

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;

/// Incoming body of every story endpoint: `{"theme": "<text>"}`.
///
/// Extracted directly from the request so field-level failures are reported
/// as 422 before any handler code runs. Unknown fields are ignored.
/// A body sent without a content type is still parsed as JSON; malformed JSON
/// is a 422 on field `body`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryRequest {
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: String,
}

/// A generated tale in the shape the client keeps in its gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: Uuid,
    pub theme: String,
    pub content: String,
    pub date: NaiveDate,
}

impl StoryRecord {
    pub fn new(theme: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            theme,
            content,
            date: Utc::now().date_naive(),
        }
    }
}

impl TryFrom<Value> for StoryRequest {
    type Error = AppError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut body = match value {
            Value::Object(map) => map,
            other => {
                return Err(AppError::invalid_field(
                    "body",
                    format!("expected a JSON object, got {}", json_type(&other)),
                ))
            }
        };

        match body.remove("theme") {
            Some(Value::String(theme)) => Ok(StoryRequest { theme }),
            Some(other) => Err(AppError::invalid_field(
                "theme",
                format!("must be a string, got {}", json_type(&other)),
            )),
            None => Err(AppError::invalid_field("theme", "field required")),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for StoryRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if req.headers().contains_key(CONTENT_TYPE) {
            match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => value,
                Err(JsonRejection::JsonSyntaxError(e)) => {
                    return Err(invalid_json(e.body_text()));
                }
                Err(rejection) => return Err(rejection.into()),
            }
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(JsonRejection::from)?;
            serde_json::from_slice::<Value>(&bytes).map_err(|e| invalid_json(e.to_string()))?
        };

        StoryRequest::try_from(value)
    }
}

fn invalid_json(detail: String) -> AppError {
    AppError::invalid_field("body", format!("invalid JSON: {detail}"))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! User payload extractor.
//!
//! Reads `name` and `email` from a JSON body, the query string or a form
//! body, in that order of precedence. A JSON field wins over the query
//! string; a query parameter wins over a form field.
//! Validation is left to the service so that every caller reports the same
//! messages.

use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FormRejection},
        FromRequest, Query, Request,
    },
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use crate::responses::error_response;
use rollcall_core::ErrorResponse;
use rollcall_service::UserRequest;
use serde_json::Value;

/// Extracts a [`UserRequest`] from the request body and query string.
#[derive(Debug, Clone, Default)]
pub struct UserPayload(pub UserRequest);

/// Rejection type for payload extraction.
#[derive(Debug)]
pub enum PayloadRejection {
    /// The body could not be read.
    Body(BytesRejection),
    /// The JSON body was malformed.
    Json(serde_json::Error),
    /// The form body was malformed.
    Form(FormRejection),
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            Self::Body(rejection) => return rejection.into_response(),
            Self::Json(err) => ("INVALID_JSON", format!("Invalid JSON: {}", err)),
            Self::Form(rejection) => ("INVALID_FORM", format!("Invalid form body: {}", rejection)),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message,
            details: None,
            trace_id: None,
        };
        error_response(StatusCode::BAD_REQUEST, body)
    }
}

/// Body encoding, as announced by the `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn from_headers(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
            return Self::Other;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || mime.ends_with("+json") {
            Self::Json
        } else if mime == "application/x-www-form-urlencoded" {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Key/value pairs in arrival order.
type Pairs = Vec<(String, String)>;

fn first_value(pairs: &Pairs, key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

fn from_pairs(pairs: &Pairs) -> UserRequest {
    UserRequest {
        name: first_value(pairs, "name"),
        email: first_value(pairs, "email"),
    }
}

/// Reads a field from a JSON object. Non-string scalars are taken in their
/// textual form and `null` counts as missing.
fn json_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_json(bytes: &Bytes) -> Result<UserRequest, PayloadRejection> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(UserRequest::default());
    }

    let body: Value = serde_json::from_slice(bytes).map_err(PayloadRejection::Json)?;
    Ok(UserRequest {
        name: json_field(&body, "name"),
        email: json_field(&body, "email"),
    })
}

#[async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query: Pairs = Query::<Pairs>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let request = match BodyKind::from_headers(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(PayloadRejection::Body)?;
                let mut request = parse_json(&bytes)?;
                if request.name.is_none() {
                    request.name = first_value(&query, "name");
                }
                if request.email.is_none() {
                    request.email = first_value(&query, "email");
                }
                request
            }
            BodyKind::Form => {
                let Form(form) = Form::<Pairs>::from_request(req, state)
                    .await
                    .map_err(PayloadRejection::Form)?;
                let combined: Pairs = query.into_iter().chain(form).collect();
                from_pairs(&combined)
            }
            BodyKind::Other => from_pairs(&query),
        };

        Ok(UserPayload(request))
    }
}

//! Response helpers for the plain (non-JSON) success bodies of the framework API.

use axum::http::StatusCode;

/// Body returned by a successful create.
pub const CREATED_BODY: &str = "ok";

/// 200 with a short text body.
pub fn ok_text(body: &'static str) -> (StatusCode, &'static str) {
    (StatusCode::OK, body)
}

/// 200 with an empty body.
pub fn ok_empty() -> StatusCode {
    StatusCode::OK
}

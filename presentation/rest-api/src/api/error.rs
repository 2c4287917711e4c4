use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every route: a short error name plus a code-style
/// message identifier. Callers can only branch on the status code.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

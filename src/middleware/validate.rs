use axum::{
    body::{to_bytes, Body},
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::config;
use crate::error::ApiError;
use crate::todos::{validate, ToDo};

/// Fixed message returned when the body cannot be read as a to-do at all.
pub const UNREADABLE_BODY: &str = "request body could not be mapped to a to-do item";

/// Validating interceptor for create and update routes.
///
/// Buffers the whole JSON body, deserializes it as a [`ToDo`] and runs the
/// validator before the wrapped handler executes. Rejections short-circuit
/// with 400; on success the request is rebuilt from the buffered bytes so the
/// handler's own `Json` extractor re-reads the same body.
pub async fn validate_todo_body(request: Request, next: Next) -> Result<Response, ApiError> {
    let limit = config::config().api.max_request_size_bytes;
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, limit)
        .await
        .map_err(|_| ApiError::bad_request(UNREADABLE_BODY))?;

    let todo: ToDo = serde_json::from_slice(&bytes).map_err(|err| {
        tracing::warn!("rejecting unreadable to-do body: {err}");
        ApiError::bad_request(UNREADABLE_BODY)
    })?;

    let violations = validate(&todo);
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "rejecting invalid to-do body");
        return Err(ApiError::validation(violations));
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// `axum::Json` with decode failures mapped into [`ApiError::BadInput`],
/// so a bad payload is always a 400 with the standard error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Everything a handler can surface to the wire. Store, hashing and
/// signing failures are folded into `Internal` at the handler boundary;
/// no raw error text reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadInput(String),
    #[error("{0}")]
    Conflict(String),
    /// One variant for both "unknown username" and "wrong password" so
    /// the two failure modes cannot drift apart in wording or shape.
    #[error("Incorrect username/password provided. Please retry")]
    InvalidCredentials,
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        ApiError::BadInput("Invalid request payload".into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Never echo internal error detail back to the caller
            ApiError::Internal(_) => "Server error".to_string(),
            other => other.to_string(),
        };
        let body = Json(json!({
            "status": message,
            "status_code": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn invalid_credentials_is_401_with_generic_message() {
        let (status, body) = body_json(ApiError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body["status"],
            "Incorrect username/password provided. Please retry"
        );
        assert_eq!(body["status_code"], 401);
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let (status, body) = body_json(ApiError::Conflict("Email already exists".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], "Email already exists");
        assert_eq!(body["status_code"], 409);
    }

    #[tokio::test]
    async fn bad_input_is_400() {
        let (status, body) =
            body_json(ApiError::BadInput("Invalid publish date format".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "Invalid publish date format");
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let (status, body) =
            body_json(ApiError::Internal(anyhow::anyhow!("pool timed out on pg:5432"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "Server error");
    }
}

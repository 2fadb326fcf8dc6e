use axum::http::StatusCode;
use thiserror::Error;

use crate::response::ResponseEnvelope;
use crate::store::StoreError;

/// Every way a lookup request can fail. The display text is the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The path has fewer than two segments.
    #[error("格式错误")]
    MalformedPath,
    /// The token segment does not match the configured token.
    #[error("token 有误")]
    Unauthorized,
    /// The key segment is empty.
    #[error("File not found")]
    MissingKey,
    /// The store has no entry for the key.
    #[error("File not found")]
    NotFound,
    /// No store is bound to the service.
    #[error("Error: {0}")]
    Configuration(String),
    #[error("Error: {0}")]
    Unexpected(String),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MalformedPath | RequestError::Unauthorized => StatusCode::FORBIDDEN,
            RequestError::MissingKey | RequestError::NotFound => StatusCode::NOT_FOUND,
            RequestError::Configuration(_) | RequestError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for RequestError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unbound(msg) => RequestError::Configuration(msg),
            StoreError::Backend(msg) => RequestError::Unexpected(msg),
        }
    }
}

impl From<RequestError> for ResponseEnvelope {
    fn from(e: RequestError) -> Self {
        ResponseEnvelope::new(e.status(), e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_have_fixed_bodies() {
        let cases = [
            (RequestError::MalformedPath, StatusCode::FORBIDDEN, "格式错误"),
            (RequestError::Unauthorized, StatusCode::FORBIDDEN, "token 有误"),
            (RequestError::MissingKey, StatusCode::NOT_FOUND, "File not found"),
            (RequestError::NotFound, StatusCode::NOT_FOUND, "File not found"),
        ];
        for (error, status, body) in cases {
            let envelope = ResponseEnvelope::from(error);
            assert_eq!(envelope.status, status);
            assert_eq!(envelope.body, body);
        }
    }

    #[test]
    fn test_store_errors_expose_message() {
        let unbound = RequestError::from(StoreError::Unbound("KV namespace is not bound".into()));
        assert_eq!(unbound.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unbound.to_string(), "Error: KV namespace is not bound");

        let backend = RequestError::from(StoreError::Backend("boom".into()));
        assert_eq!(backend, RequestError::Unexpected("boom".into()));
        assert_eq!(ResponseEnvelope::from(backend).body, "Error: boom");
    }
}

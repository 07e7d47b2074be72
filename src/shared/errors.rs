use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::shared::api::ApiResponse;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Caller-visible failure of a profile-directory operation.
///
/// Every variant maps to one HTTP status; the message travels to the caller
/// verbatim except for infrastructure failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Forbidden(_) => "FORBIDDEN",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to hand back to the caller.
    pub fn message(&self) -> String {
        match self {
            ServiceError::Forbidden(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::BadRequest(msg) => msg.clone(),
            ServiceError::Repository(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Repository(detail) = self {
            tracing::error!("Repository failure: {}", detail);
        }
        ApiResponse::error(self.status_code(), self.code(), &self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(
            ServiceError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Repository("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repository_detail_is_not_exposed() {
        let err = ServiceError::Repository("relation \"info\" does not exist".into());

        assert_eq!(err.message(), "An unexpected error occurred");
    }

    #[actix_web::test]
    async fn error_response_renders_envelope() {
        let err = ServiceError::NotFound("Please edit your personal information.".into());

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(
            json["error"]["message"],
            "Please edit your personal information."
        );
    }
}

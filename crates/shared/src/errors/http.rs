use crate::errors::{
    errors::{ErrorResponse, ValidationErrorResponse},
    repository::RepositoryError,
    service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Validation(violations) => {
                let body = Json(ValidationErrorResponse {
                    status: "error".to_string(),
                    message: "Validation failed".to_string(),
                    violations,
                });
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            ServiceError::MalformedInput(detail) => (
                StatusCode::BAD_REQUEST,
                format!("invalid request body format: {detail}"),
            ),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
                RepositoryError::Timeout => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store call timed out".to_string(),
                ),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppErrorHttp(ServiceError::Repo(RepositoryError::NotFound)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            AppErrorHttp(ServiceError::Validation(vec!["userID: required".to_string()]))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_input_maps_to_400() {
        let response =
            AppErrorHttp(ServiceError::MalformedInput("expected value".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_timeout_maps_to_500() {
        let response = AppErrorHttp(ServiceError::Repo(RepositoryError::Timeout)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::errors::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CashbackError {
    #[error("orderId is required")]
    MissingOrderId,

    #[error("order has no value")]
    MissingOrderValue,

    #[error("order has no client profile id")]
    MissingProfile,

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ledger rejected the submission: {0}")]
    Ledger(String),
}

impl IntoResponse for CashbackError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingOrderId | Self::MissingOrderValue | Self::MissingProfile => {
                StatusCode::BAD_REQUEST
            }
            Self::Http(_) | Self::Ledger(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

use crate::{errors::CashbackError, state::AppState};
use axum::{
    Json,
    Router,
    extract::State,
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CashbackRequest {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

pub async fn send_cashback(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CashbackRequest>,
) -> Result<impl IntoResponse, CashbackError> {
    let order_id = body
        .order_id
        .filter(|id| !id.is_empty())
        .ok_or(CashbackError::MissingOrderId)?;

    let response = state.cashback.process(&order_id).await?;
    Ok(Json(response))
}

pub fn cashback_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/cashback", post(send_cashback))
        .with_state(state)
}

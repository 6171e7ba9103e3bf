use crate::{
    client::{OrdersClient, PointsClient},
    errors::CashbackError,
};
use shared::domain::responses::{ApiResponse, PointsResponse};
use tracing::info;

/// Points granted for an order: one point per whole 100 units of order
/// value, remainder dropped.
pub fn cashback_points(order_value: i64) -> i64 {
    order_value.div_euclid(100)
}

pub struct CashbackService {
    orders: OrdersClient,
    points: PointsClient,
}

impl CashbackService {
    pub fn new(orders: OrdersClient, points: PointsClient) -> Self {
        Self { orders, points }
    }

    /// Fetches the order, derives the cashback quantity and forwards it to
    /// the ledger. Incomplete orders fail before the ledger is called; no
    /// retry on ledger failure, resubmission would accrue twice.
    pub async fn process(
        &self,
        order_id: &str,
    ) -> Result<ApiResponse<PointsResponse>, CashbackError> {
        let order = self.orders.get_order(order_id).await?;

        let value = order.value.ok_or(CashbackError::MissingOrderValue)?;
        let user_id = order
            .client_profile_data
            .and_then(|profile| profile.user_profile_id)
            .filter(|id| !id.is_empty())
            .ok_or(CashbackError::MissingProfile)?;

        let points = cashback_points(value);

        info!("Order {order_id}: value={value} -> {points} points for user={user_id}");

        self.points.submit_points(&user_id, points).await
    }
}

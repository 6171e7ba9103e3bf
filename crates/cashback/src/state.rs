use crate::{
    client::{OrdersClient, PointsClient},
    config::CashbackConfig,
    service::CashbackService,
};
use anyhow::Result;

pub struct AppState {
    pub cashback: CashbackService,
}

impl AppState {
    pub fn new(config: &CashbackConfig) -> Result<Self> {
        let orders = OrdersClient::new(&config.orders_api_url)?;
        let points = PointsClient::new(&config.points_api_url)?;

        Ok(Self {
            cashback: CashbackService::new(orders, points),
        })
    }
}

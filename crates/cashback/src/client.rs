use crate::errors::CashbackError;
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use shared::domain::{requests::CreatePointsRequest, responses::{ApiResponse, PointsResponse}};
use std::time::Duration;
use tracing::{error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct Order {
    pub value: Option<i64>,
    #[serde(rename = "clientProfileData")]
    pub client_profile_data: Option<ClientProfileData>,
}

#[derive(Debug, Deserialize)]
pub struct ClientProfileData {
    #[serde(rename = "userProfileId")]
    pub user_profile_id: Option<String>,
}

pub struct OrdersClient {
    http: Client,
    base_url: String,
}

impl OrdersClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build orders http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Order, CashbackError> {
        let url = format!("{}/orders/{order_id}", self.base_url);

        let order = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                error!("❌ Orders API rejected order {order_id}: {e}");
                CashbackError::Http(e)
            })?
            .json::<Order>()
            .await?;

        Ok(order)
    }
}

pub struct PointsClient {
    http: Client,
    base_url: String,
}

impl PointsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build points http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn submit_points(
        &self,
        user_id: &str,
        points: i64,
    ) -> Result<ApiResponse<PointsResponse>, CashbackError> {
        let url = format!("{}/api/points", self.base_url);
        let body = CreatePointsRequest {
            user_id: user_id.to_string(),
            points,
        };

        info!("Submitting {points} points for user={user_id} to the ledger");

        let response = self.http.put(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("❌ Ledger returned {status} for user {user_id}: {detail}");
            return Err(CashbackError::Ledger(format!("{status}: {detail}")));
        }

        Ok(response.json().await?)
    }
}

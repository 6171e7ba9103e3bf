use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct CashbackConfig {
    pub port: u16,
    pub orders_api_url: String,
    pub points_api_url: String,
}

impl CashbackConfig {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing env: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;
        let orders_api_url =
            std::env::var("ORDERS_API_URL").context("Missing env: ORDERS_API_URL")?;
        let points_api_url =
            std::env::var("POINTS_API_URL").context("Missing env: POINTS_API_URL")?;

        Ok(Self {
            port,
            orders_api_url,
            points_api_url,
        })
    }
}

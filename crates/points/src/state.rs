use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{cache::CacheStore, config::ConnectionPool};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        // Process-scoped cache shared by commands (refresh on write) and
        // queries (read-through), injected rather than global.
        let cache_store = Arc::new(CacheStore::new());

        let di_container = DependenciesInject::new(db, cache_store)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}

use anyhow::Result;
use shared::{
    abstract_trait::points::{
        repository::{DynPointsCommandRepository, DynPointsQueryRepository},
        service::{DynPointsCommandService, DynPointsQueryService},
    },
    cache::CacheStore,
    config::ConnectionPool,
    repository::points::{PointsCommandRepository, PointsQueryRepository},
    service::points::{PointsCommandService, PointsQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct PointsCommandDeps {
    pub service: DynPointsCommandService,
}

impl PointsCommandDeps {
    pub fn new(db: ConnectionPool, cache_store: Arc<CacheStore>) -> Self {
        let repo =
            Arc::new(PointsCommandRepository::new(db)) as DynPointsCommandRepository;
        let service =
            Arc::new(PointsCommandService::new(repo, cache_store)) as DynPointsCommandService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct PointsQueryDeps {
    pub service: DynPointsQueryService,
}

impl PointsQueryDeps {
    pub fn new(db: ConnectionPool, cache_store: Arc<CacheStore>) -> Self {
        let repo = Arc::new(PointsQueryRepository::new(db)) as DynPointsQueryRepository;
        let service =
            Arc::new(PointsQueryService::new(repo, cache_store)) as DynPointsQueryService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub points_command: PointsCommandDeps,
    pub points_query: PointsQueryDeps,
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, cache_store: Arc<CacheStore>) -> Result<Self> {
        let points_command = PointsCommandDeps::new(db.clone(), cache_store.clone());
        let points_query = PointsQueryDeps::new(db, cache_store);

        Ok(Self {
            points_command,
            points_query,
        })
    }
}

use crate::{
    abstract_trait::points::{
        repository::DynPointsQueryRepository, service::PointsQueryServiceTrait,
    },
    cache::CacheStore,
    domain::responses::{ApiResponse, PointsResponse},
    errors::{RepositoryError, ServiceError},
    service::points::user_cache_key,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

pub struct PointsQueryService {
    query: DynPointsQueryRepository,
    cache_store: Arc<CacheStore>,
}

impl PointsQueryService {
    pub fn new(query: DynPointsQueryRepository, cache_store: Arc<CacheStore>) -> Self {
        Self { query, cache_store }
    }
}

#[async_trait]
impl PointsQueryServiceTrait for PointsQueryService {
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<PointsResponse>, ServiceError> {
        info!("🔍 Finding points record for user_id={user_id}");

        let cache_key = user_cache_key(user_id);

        if let Some(cached) = self
            .cache_store
            .get_from_cache::<PointsResponse>(&cache_key)
            .await
        {
            info!("✅ Found points record for user={user_id} in cache");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Points record retrieved successfully".to_string(),
                data: cached,
            });
        }

        let record = self.query.find_by_user(user_id).await.map_err(|e| {
            error!("❌ Failed to fetch record for user {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let Some(record) = record else {
            info!("No points record for user_id={user_id}");
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        };

        let response = PointsResponse::from(record);

        self.cache_store.set_to_cache(&cache_key, &response).await;

        info!(
            "✅ Found points record for user={user_id} with total={}",
            response.points
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Points record retrieved successfully".to_string(),
            data: response,
        })
    }

    async fn find_all(&self) -> Result<ApiResponse<Vec<PointsResponse>>, ServiceError> {
        info!("🔍 Listing all points records");

        let records = self.query.find_all().await.map_err(|e| {
            error!("❌ Failed to list records: {e:?}");
            ServiceError::Repo(e)
        })?;

        let responses: Vec<PointsResponse> =
            records.into_iter().map(PointsResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Points records retrieved successfully".to_string(),
            data: responses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::points::service::{DynPointsCommandService, DynPointsQueryService},
        domain::requests::CreatePointsRequest,
        service::points::{PointsCommandService, test_support::MockPointsRepository},
    };

    fn services(
        repo: Arc<MockPointsRepository>,
    ) -> (DynPointsCommandService, DynPointsQueryService) {
        let cache = Arc::new(CacheStore::new());
        let command: DynPointsCommandService =
            Arc::new(PointsCommandService::new(repo.clone(), cache.clone()));
        let query: DynPointsQueryService = Arc::new(PointsQueryService::new(repo, cache));
        (command, query)
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (_, query) = services(Arc::new(MockPointsRepository::default()));

        let err = query.find_by_user("nobody").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (_, query) = services(Arc::new(MockPointsRepository::default()));

        let response = query.find_all().await.unwrap();
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn accrue_then_get_then_list() {
        let (command, query) = services(Arc::new(MockPointsRepository::default()));

        command
            .accrue(&CreatePointsRequest {
                user_id: "u1".to_string(),
                points: 10,
            })
            .await
            .unwrap();
        command
            .accrue(&CreatePointsRequest {
                user_id: "u1".to_string(),
                points: 5,
            })
            .await
            .unwrap();

        let fetched = query.find_by_user("u1").await.unwrap();
        assert_eq!(fetched.data.points, 15);

        let err = query.find_by_user("u2").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));

        let listed = query.find_all().await.unwrap();
        assert_eq!(listed.data.len(), 1);
        assert_eq!(listed.data[0].user_id, "u1");
        assert_eq!(listed.data[0].points, 15);
    }

    #[tokio::test]
    async fn cached_read_survives_a_store_wipe() {
        let repo = Arc::new(MockPointsRepository::default());
        let (command, query) = services(repo.clone());

        command
            .accrue(&CreatePointsRequest {
                user_id: "u1".to_string(),
                points: 10,
            })
            .await
            .unwrap();

        repo.clear().await;

        // The accrual refreshed the cache, so the read-through layer still
        // serves the record.
        let fetched = query.find_by_user("u1").await.unwrap();
        assert_eq!(fetched.data.points, 10);
    }
}

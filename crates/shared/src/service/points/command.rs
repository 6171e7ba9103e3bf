use crate::{
    abstract_trait::points::{
        repository::DynPointsCommandRepository, service::PointsCommandServiceTrait,
    },
    cache::CacheStore,
    domain::{
        requests::CreatePointsRequest,
        responses::{ApiResponse, PointsResponse},
    },
    errors::{ServiceError, collect_validation_errors},
    service::points::user_cache_key,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct PointsCommandService {
    command: DynPointsCommandRepository,
    cache_store: Arc<CacheStore>,
}

impl PointsCommandService {
    pub fn new(command: DynPointsCommandRepository, cache_store: Arc<CacheStore>) -> Self {
        Self {
            command,
            cache_store,
        }
    }
}

#[async_trait]
impl PointsCommandServiceTrait for PointsCommandService {
    async fn accrue(
        &self,
        request: &CreatePointsRequest,
    ) -> Result<ApiResponse<PointsResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let violations = collect_validation_errors(&validation_errors);
            error!("Validation failed: {violations:?}");
            return Err(ServiceError::Validation(violations));
        }

        info!(
            "Accruing {} points for user_id={}",
            request.points, request.user_id
        );

        // Fresh id per submission; the store only keeps it when this accrual
        // creates the record.
        let record_id = Uuid::new_v4();

        let accrued = self
            .command
            .accrue(&request.user_id, request.points, record_id)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to accrue points for user {}: {e:?}",
                    request.user_id,
                );
                ServiceError::Repo(e)
            })?;

        let message = if accrued.created {
            info!(
                "✅ Points record created for user={} with total={}",
                request.user_id, accrued.model.points
            );
            "Points record created successfully"
        } else {
            info!(
                "✅ Points accrued for user={}, new total={}",
                request.user_id, accrued.model.points
            );
            "Points accrued successfully"
        };

        let response = PointsResponse::from(accrued.model);

        self.cache_store
            .set_to_cache(&user_cache_key(&response.user_id), &response)
            .await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::points::service::DynPointsCommandService,
        service::points::test_support::MockPointsRepository,
    };

    fn command_service(repo: Arc<MockPointsRepository>) -> DynPointsCommandService {
        Arc::new(PointsCommandService::new(repo, Arc::new(CacheStore::new())))
    }

    fn request(user_id: &str, points: i64) -> CreatePointsRequest {
        CreatePointsRequest {
            user_id: user_id.to_string(),
            points,
        }
    }

    #[tokio::test]
    async fn first_accrual_creates_the_record() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        let response = service.accrue(&request("u1", 10)).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.user_id, "u1");
        assert_eq!(response.data.points, 10);
        assert!(response.message.contains("created"));
    }

    #[tokio::test]
    async fn second_accrual_adds_and_keeps_the_record_id() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        let first = service.accrue(&request("u1", 10)).await.unwrap();
        let second = service.accrue(&request("u1", 5)).await.unwrap();

        assert_eq!(second.data.points, 15);
        assert_eq!(second.data.record_id, first.data.record_id);
        assert!(second.message.contains("accrued"));
    }

    #[tokio::test]
    async fn resubmission_is_not_deduplicated() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        service.accrue(&request("u1", 7)).await.unwrap();
        let again = service.accrue(&request("u1", 7)).await.unwrap();

        // No idempotency key: the same payload twice means two additions.
        assert_eq!(again.data.points, 14);
    }

    #[tokio::test]
    async fn zero_points_still_writes() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo.clone());

        let response = service.accrue(&request("u1", 0)).await.unwrap();

        assert_eq!(response.data.points, 0);
        assert!(repo.contains("u1").await);
    }

    #[tokio::test]
    async fn empty_user_id_fails_validation() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        let err = service.accrue(&request("", 10)).await.unwrap_err();

        match err {
            ServiceError::Validation(violations) => {
                assert_eq!(violations, vec!["user_id: must not be empty".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_accruals_never_lose_updates() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        service.accrue(&request("u1", 100)).await.unwrap();

        let mut handles = Vec::new();
        for amount in 1..=32i64 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.accrue(&request("u1", amount)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let final_total = service.accrue(&request("u1", 0)).await.unwrap().data.points;
        assert_eq!(final_total, 100 + (1..=32i64).sum::<i64>());
    }

    #[tokio::test]
    async fn accruals_for_different_users_stay_separate() {
        let repo = Arc::new(MockPointsRepository::default());
        let service = command_service(repo);

        let u1 = service.accrue(&request("u1", 10)).await.unwrap();
        let u2 = service.accrue(&request("u2", 20)).await.unwrap();

        assert_eq!(u1.data.points, 10);
        assert_eq!(u2.data.points, 20);
        assert_ne!(u1.data.record_id, u2.data.record_id);
    }
}

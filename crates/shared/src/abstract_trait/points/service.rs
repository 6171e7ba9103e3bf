use crate::{
    domain::{
        requests::CreatePointsRequest,
        responses::{ApiResponse, PointsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPointsCommandService = Arc<dyn PointsCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait PointsCommandServiceTrait {
    async fn accrue(
        &self,
        request: &CreatePointsRequest,
    ) -> Result<ApiResponse<PointsResponse>, ServiceError>;
}

pub type DynPointsQueryService = Arc<dyn PointsQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PointsQueryServiceTrait {
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<PointsResponse>, ServiceError>;

    async fn find_all(&self) -> Result<ApiResponse<Vec<PointsResponse>>, ServiceError>;
}

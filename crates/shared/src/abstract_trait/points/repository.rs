use crate::{
    errors::RepositoryError,
    model::{AccruedPoints, PointsModel},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynPointsCommandRepository = Arc<dyn PointsCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PointsCommandRepositoryTrait {
    /// Adds `points` onto the user's running total as one atomic unit:
    /// concurrent accruals for the same user must always sum, never lose an
    /// addition. `record_id` is used only when the accrual creates the row.
    async fn accrue(
        &self,
        user_id: &str,
        points: i64,
        record_id: Uuid,
    ) -> Result<AccruedPoints, RepositoryError>;

    /// Unconditional overwrite of the record at `record.user_id`. Low-level
    /// primitive; carries no read-modify-write guarantee of its own.
    async fn save(&self, record: &PointsModel) -> Result<PointsModel, RepositoryError>;
}

pub type DynPointsQueryRepository = Arc<dyn PointsQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PointsQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PointsModel>, RepositoryError>;

    /// Every record, unordered; no snapshot guarantee under concurrent
    /// writes.
    async fn find_all(&self) -> Result<Vec<PointsModel>, RepositoryError>;
}

use crate::{
    abstract_trait::points::repository::PointsQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::PointsModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct PointsQueryRepository {
    db: ConnectionPool,
}

impl PointsQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PointsQueryRepositoryTrait for PointsQueryRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PointsModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from_sqlx(e)
        })?;

        let record = sqlx::query_as::<_, PointsModel>(
            r#"
            SELECT
                user_id,
                points,
                record_id,
                created_at,
                updated_at
            FROM points_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch record for user {user_id}: {e:?}");
            RepositoryError::from_sqlx(e)
        })?;

        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<PointsModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from_sqlx(e)
        })?;

        let records = sqlx::query_as::<_, PointsModel>(
            r#"
            SELECT
                user_id,
                points,
                record_id,
                created_at,
                updated_at
            FROM points_records
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch records: {e:?}");
            RepositoryError::from_sqlx(e)
        })?;

        info!("✅ Retrieved {} points records", records.len());

        Ok(records)
    }
}

use crate::{
    abstract_trait::points::repository::PointsCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{AccruedPoints, PointsModel},
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::error;
use uuid::Uuid;

pub struct PointsCommandRepository {
    db: ConnectionPool,
}

impl PointsCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from_sqlx(e)
        })
    }
}

#[async_trait]
impl PointsCommandRepositoryTrait for PointsCommandRepository {
    async fn accrue(
        &self,
        user_id: &str,
        points: i64,
        record_id: Uuid,
    ) -> Result<AccruedPoints, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Single-statement upsert: the row-level add happens inside Postgres,
        // so same-user accruals serialize on the row and a cancelled request
        // either applied the whole accrual or none of it. The bound record_id
        // is only taken on insert; an existing row keeps its own.
        let row = sqlx::query(
            r#"
            INSERT INTO points_records (
                user_id,
                points,
                record_id,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET points = points_records.points + EXCLUDED.points,
                updated_at = NOW()
            RETURNING
                user_id,
                points,
                record_id,
                created_at,
                updated_at,
                (xmax = 0) AS created
            "#,
        )
        .bind(user_id)
        .bind(points)
        .bind(record_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to accrue points for user {user_id}: {e:?}");
            RepositoryError::from_sqlx(e)
        })?;

        let model = PointsModel {
            user_id: row.try_get("user_id").map_err(RepositoryError::Sqlx)?,
            points: row.try_get("points").map_err(RepositoryError::Sqlx)?,
            record_id: row.try_get("record_id").map_err(RepositoryError::Sqlx)?,
            created_at: row.try_get("created_at").map_err(RepositoryError::Sqlx)?,
            updated_at: row.try_get("updated_at").map_err(RepositoryError::Sqlx)?,
        };
        let created = row.try_get("created").map_err(RepositoryError::Sqlx)?;

        Ok(AccruedPoints { model, created })
    }

    async fn save(&self, record: &PointsModel) -> Result<PointsModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let saved = sqlx::query_as::<_, PointsModel>(
            r#"
            INSERT INTO points_records (
                user_id,
                points,
                record_id,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET points = EXCLUDED.points,
                updated_at = NOW()
            RETURNING
                user_id,
                points,
                record_id,
                created_at,
                updated_at
            "#,
        )
        .bind(&record.user_id)
        .bind(record.points)
        .bind(record.record_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to save record for user {}: {e:?}", record.user_id);
            RepositoryError::from_sqlx(e)
        })?;

        Ok(saved)
    }
}

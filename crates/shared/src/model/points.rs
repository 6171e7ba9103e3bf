use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the ledger: at most one per `user_id`, `record_id` assigned
/// once at creation and never rewritten by an accrual.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PointsModel {
    pub user_id: String,
    pub points: i64,
    pub record_id: Uuid,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Result of an atomic accrual: the row as persisted plus whether this
/// accrual created the row or added onto an existing one.
#[derive(Debug, Clone)]
pub struct AccruedPoints {
    pub model: PointsModel,
    pub created: bool,
}

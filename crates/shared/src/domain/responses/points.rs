use crate::model::PointsModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub points: i64,
    #[serde(rename = "recordID")]
    pub record_id: Uuid,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<PointsModel> for PointsResponse {
    fn from(model: PointsModel) -> Self {
        Self {
            user_id: model.user_id,
            points: model.points,
            record_id: model.record_id,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}

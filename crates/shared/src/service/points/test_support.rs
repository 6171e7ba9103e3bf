use crate::{
    abstract_trait::points::repository::{
        PointsCommandRepositoryTrait, PointsQueryRepositoryTrait,
    },
    errors::RepositoryError,
    model::{AccruedPoints, PointsModel},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory stand-in for the Postgres repositories. The map lock makes
/// `accrue` atomic per call, mirroring the single-statement upsert the real
/// store relies on.
#[derive(Default)]
pub struct MockPointsRepository {
    records: Mutex<HashMap<String, PointsModel>>,
}

impl MockPointsRepository {
    pub async fn contains(&self, user_id: &str) -> bool {
        self.records.lock().await.contains_key(user_id)
    }

    pub async fn clear(&self) {
        self.records.lock().await.clear();
    }
}

#[async_trait]
impl PointsCommandRepositoryTrait for MockPointsRepository {
    async fn accrue(
        &self,
        user_id: &str,
        points: i64,
        record_id: Uuid,
    ) -> Result<AccruedPoints, RepositoryError> {
        let mut records = self.records.lock().await;

        match records.get_mut(user_id) {
            Some(existing) => {
                existing.points += points;
                Ok(AccruedPoints {
                    model: existing.clone(),
                    created: false,
                })
            }
            None => {
                let model = PointsModel {
                    user_id: user_id.to_string(),
                    points,
                    record_id,
                    created_at: None,
                    updated_at: None,
                };
                records.insert(user_id.to_string(), model.clone());
                Ok(AccruedPoints {
                    model,
                    created: true,
                })
            }
        }
    }

    async fn save(&self, record: &PointsModel) -> Result<PointsModel, RepositoryError> {
        let mut records = self.records.lock().await;
        records.insert(record.user_id.clone(), record.clone());
        Ok(record.clone())
    }
}

#[async_trait]
impl PointsQueryRepositoryTrait for MockPointsRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<PointsModel>, RepositoryError> {
        Ok(self.records.lock().await.get(user_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PointsModel>, RepositoryError> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn save_overwrites_unconditionally() {
        let repo = MockPointsRepository::default();
        let record_id = Uuid::new_v4();

        repo.accrue("u1", 10, record_id).await.unwrap();

        let overwrite = PointsModel {
            user_id: "u1".to_string(),
            points: 3,
            record_id,
            created_at: None,
            updated_at: None,
        };
        repo.save(&overwrite).await.unwrap();

        let stored = repo.find_by_user("u1").await.unwrap().unwrap();
        assert_eq!(stored.points, 3);
    }
}

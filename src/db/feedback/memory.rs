use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::feedback::FeedbackStore,
    errors::AppError,
    models::{FeedbackFields, FeedbackInput, FeedbackRecord},
};

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<Uuid, FeedbackRecord>,
    by_owner: HashMap<String, HashSet<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFeedbackStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Feedback {} not found", id))
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn insert(&self, input: FeedbackInput) -> Result<FeedbackRecord, AppError> {
        let record = FeedbackRecord::new(Uuid::new_v4(), input, Utc::now());

        let mut inner = self.inner.write().await;
        inner
            .by_owner
            .entry(record.owner_id.clone())
            .or_default()
            .insert(record.id);
        inner.records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<FeedbackRecord, AppError> {
        self.inner
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, AppError> {
        let inner = self.inner.read().await;
        let Some(ids) = inner.by_owner.get(owner_id) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn replace(
        &self,
        id: Uuid,
        fields: FeedbackFields,
    ) -> Result<FeedbackRecord, AppError> {
        let mut inner = self.inner.write().await;
        let record = inner.records.get_mut(&id).ok_or_else(|| not_found(id))?;
        record.apply(fields, Utc::now());

        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let record = inner.records.remove(&id).ok_or_else(|| not_found(id))?;

        if let Some(ids) = inner.by_owner.get_mut(&record.owner_id) {
            ids.remove(&id);
            if ids.is_empty() {
                inner.by_owner.remove(&record.owner_id);
            }
        }

        Ok(())
    }
}

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::FeedbackStore,
    errors::AppError,
    models::{FeedbackInput, FeedbackRecord},
};

// Field content is not re-checked here; the client validates before submitting.
#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: FeedbackInput) -> Result<FeedbackRecord, AppError> {
        let record = self.store.insert(input).await?;
        tracing::info!("Feedback {} created for owner {}", record.id, record.owner_id);
        Ok(record)
    }

    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, AppError> {
        let records = self.store.find_by_owner(owner_id).await?;
        tracing::debug!("Found {} feedback for owner {}", records.len(), owner_id);
        Ok(records)
    }

    // The owner in `input` is ignored.
    pub async fn update(&self, id: Uuid, input: FeedbackInput) -> Result<FeedbackRecord, AppError> {
        let record = self.store.replace(id, input.fields).await?;
        tracing::info!("Feedback {} updated", id);
        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::info!("Feedback {} deleted", id);
        Ok(())
    }
}

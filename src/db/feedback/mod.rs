pub mod delete;
pub mod get;
pub mod memory;
pub mod post;
pub mod put;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackFields, FeedbackInput, FeedbackRecord},
    state::RedisClient,
};

pub use memory::MemoryFeedbackStore;

/// `replace` and `delete` fail with `AppError::NotFound` for unknown ids;
/// an owner without records lists as empty.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn insert(&self, input: FeedbackInput) -> Result<FeedbackRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<FeedbackRecord, AppError>;

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, AppError>;

    async fn replace(&self, id: Uuid, fields: FeedbackFields)
    -> Result<FeedbackRecord, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct RedisFeedbackStore {
    redis: RedisClient,
}

impl RedisFeedbackStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl FeedbackStore for RedisFeedbackStore {
    async fn insert(&self, input: FeedbackInput) -> Result<FeedbackRecord, AppError> {
        post::create_feedback(input, &self.redis).await
    }

    async fn get(&self, id: Uuid) -> Result<FeedbackRecord, AppError> {
        get::get_feedback(id, &self.redis).await
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, AppError> {
        get::get_feedback_by_owner(owner_id, &self.redis).await
    }

    async fn replace(
        &self,
        id: Uuid,
        fields: FeedbackFields,
    ) -> Result<FeedbackRecord, AppError> {
        put::replace_feedback(id, fields, &self.redis).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        delete::delete_feedback(id, &self.redis).await
    }
}

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{FeedbackInput, FeedbackRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Feedback not found")]
    NotFound,

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No logged-in user")]
    MissingOwner,
}

#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn list(&self, owner_id: &str) -> Result<Vec<FeedbackRecord>, ClientError>;

    async fn create(&self, input: &FeedbackInput) -> Result<FeedbackRecord, ClientError>;

    async fn update(&self, id: Uuid, input: &FeedbackInput)
    -> Result<FeedbackRecord, ClientError>;

    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

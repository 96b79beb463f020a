pub mod feedback;
pub mod redis;

pub use feedback::{FeedbackDraft, FeedbackFields, FeedbackInput, FeedbackList, FeedbackRecord, Rating};

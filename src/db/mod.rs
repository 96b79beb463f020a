pub mod feedback;

pub use feedback::{FeedbackStore, MemoryFeedbackStore, RedisFeedbackStore};

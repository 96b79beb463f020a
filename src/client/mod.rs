pub mod api;
pub mod form;
pub mod http;
pub mod session;

pub use api::{ClientError, FeedbackApi};
pub use form::{ClientMode, DeleteOutcome, FeedbackClient, InFlight, SubmitOutcome};
pub use http::{ClientConfig, HttpFeedbackApi};
pub use session::{SESSION_STORAGE_KEY, Session, SessionUser};

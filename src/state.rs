use bb8::Pool;
use bb8_redis::RedisConnectionManager;

use crate::service::FeedbackService;

#[derive(Clone)]
pub struct AppState {
    pub feedback: FeedbackService,
}

pub type RedisClient = Pool<RedisConnectionManager>;

use std::{collections::HashMap, sync::LazyLock};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackFields, FeedbackRecord, redis::RedisKey},
    state::RedisClient,
};

// Existence check and write in one step, so a concurrent delete can't leave
// an orphan hash behind. Returns the stored hash, or nil when the key is gone.
static REPLACE_SCRIPT: LazyLock<redis::Script> = LazyLock::new(|| {
    redis::Script::new(
        r#"
        if redis.call('EXISTS', KEYS[1]) == 0 then
            return false
        end
        redis.call('HSET', KEYS[1], unpack(ARGV))
        return redis.call('HGETALL', KEYS[1])
        "#,
    )
});

pub async fn replace_feedback(
    id: Uuid,
    fields: FeedbackFields,
    redis: &RedisClient,
) -> Result<FeedbackRecord, AppError> {
    let mut conn = redis.get().await?;

    let rating = fields.rating.to_string();
    let updated_at = Utc::now().to_rfc3339();
    let stored: Option<HashMap<String, String>> = REPLACE_SCRIPT
        .key(RedisKey::feedback(id))
        .arg(&[
            "name",
            fields.name.as_str(),
            "email",
            fields.email.as_str(),
            "rating",
            rating.as_str(),
            "message",
            fields.message.as_str(),
            "updated_at",
            updated_at.as_str(),
        ])
        .invoke_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let Some(stored) = stored else {
        return Err(AppError::NotFound(format!("Feedback {} not found", id)));
    };

    tracing::debug!("Replaced feedback {}", id);
    FeedbackRecord::from_redis_hash(&stored)
}

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackInput, FeedbackRecord, redis::RedisKey},
    state::RedisClient,
};

pub async fn create_feedback(
    input: FeedbackInput,
    redis: &RedisClient,
) -> Result<FeedbackRecord, AppError> {
    let mut conn = redis.get().await?;

    let record = FeedbackRecord::new(Uuid::new_v4(), input, Utc::now());
    let key = RedisKey::feedback(record.id);
    let fields = record.to_redis_hash();

    let _: () = redis::pipe()
        .atomic()
        .cmd("HSET")
        .arg(&key)
        .arg(
            fields
                .iter()
                .flat_map(|(k, v)| [k.as_str(), v.as_str()])
                .collect::<Vec<&str>>(),
        )
        .ignore()
        .cmd("SADD")
        .arg(RedisKey::owner_feedback(&record.owner_id))
        .arg(record.id.to_string())
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::debug!("Stored feedback {} for owner {}", record.id, record.owner_id);
    Ok(record)
}

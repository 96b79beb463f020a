use std::collections::HashMap;

use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{FeedbackRecord, redis::RedisKey},
    state::RedisClient,
};

pub async fn get_feedback(id: Uuid, redis: &RedisClient) -> Result<FeedbackRecord, AppError> {
    let mut conn = redis.get().await?;

    let data: HashMap<String, String> = conn
        .hgetall(RedisKey::feedback(id))
        .await
        .map_err(AppError::RedisCommandError)?;

    if data.is_empty() {
        return Err(AppError::NotFound(format!("Feedback {} not found", id)));
    }

    FeedbackRecord::from_redis_hash(&data)
}

pub async fn get_feedback_by_owner(
    owner_id: &str,
    redis: &RedisClient,
) -> Result<Vec<FeedbackRecord>, AppError> {
    let mut conn = redis.get().await?;

    let ids: Vec<String> = conn
        .smembers(RedisKey::owner_feedback(owner_id))
        .await
        .map_err(AppError::RedisCommandError)?;

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let valid_ids: Vec<Uuid> = ids
        .iter()
        .filter_map(|id_str| Uuid::parse_str(id_str).ok())
        .collect();

    let mut pipe = redis::pipe();
    for id in &valid_ids {
        pipe.cmd("HGETALL").arg(RedisKey::feedback(*id));
    }

    let results: Vec<HashMap<String, String>> = pipe
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    let mut records = Vec::with_capacity(results.len());
    for (id, data) in valid_ids.iter().zip(results) {
        if data.is_empty() {
            tracing::warn!("Owner {} indexes missing feedback {}", owner_id, id);
            continue;
        }
        match FeedbackRecord::from_redis_hash(&data) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("Skipping unreadable feedback {}: {}", id, e),
        }
    }

    Ok(records)
}

use redis::AsyncCommands;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::redis::RedisKey,
    state::RedisClient,
};

pub async fn delete_feedback(id: Uuid, redis: &RedisClient) -> Result<(), AppError> {
    let mut conn = redis.get().await?;

    let key = RedisKey::feedback(id);
    let owner_id: Option<String> = conn
        .hget(&key, "owner_id")
        .await
        .map_err(AppError::RedisCommandError)?;

    let Some(owner_id) = owner_id else {
        return Err(AppError::NotFound(format!("Feedback {} not found", id)));
    };

    let _: () = redis::pipe()
        .atomic()
        .cmd("DEL")
        .arg(&key)
        .ignore()
        .cmd("SREM")
        .arg(RedisKey::owner_feedback(&owner_id))
        .arg(id.to_string())
        .ignore()
        .query_async(&mut *conn)
        .await
        .map_err(AppError::RedisCommandError)?;

    tracing::debug!("Deleted feedback {} of owner {}", id, owner_id);
    Ok(())
}

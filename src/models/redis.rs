use uuid::Uuid;

pub struct RedisKey;

impl RedisKey {
    pub fn feedback(id: Uuid) -> String {
        format!("feedback:{id}")
    }

    // Index of record ids belonging to one owner
    pub fn owner_feedback(owner_id: &str) -> String {
        format!("owner:{owner_id}:feedback")
    }
}

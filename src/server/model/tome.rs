use chrono::{DateTime, Utc};

/// A player on a guild's tome list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomeEntry {
    pub id: i32,
    pub username: String,
    pub date_added: DateTime<Utc>,
}

impl TomeEntry {
    pub fn from_entity(entity: entity::tome::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            date_added: entity.date_added,
        }
    }
}


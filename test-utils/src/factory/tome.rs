//! Tome entry factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tome entries inside a guild database.
///
/// `date_added` defaults to now; set it explicitly when a test depends on ordering.
pub struct TomeFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    date_added: DateTime<Utc>,
}

impl<'a> TomeFactory<'a> {
    /// Creates a new TomeFactory with username `"player_{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("player_{}", next_id()),
            date_added: Utc::now(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds and inserts the tome entry.
    pub async fn build(self) -> Result<entity::tome::Model, DbErr> {
        entity::tome::ActiveModel {
            username: ActiveValue::Set(self.username),
            date_added: ActiveValue::Set(self.date_added),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tome entry with default values.
pub async fn create_tome(db: &DatabaseConnection) -> Result<entity::tome::Model, DbErr> {
    TomeFactory::new(db).build().await
}

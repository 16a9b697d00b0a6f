//! Aspect counter factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating aspect counter rows inside a guild database.
///
/// Defaults mirror the collection defaults: every counter starts at zero.
pub struct AspectFactory<'a> {
    db: &'a DatabaseConnection,
    uuid: String,
    aspects: i64,
    emeralds: i64,
    raids: i64,
}

impl<'a> AspectFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            uuid: format!("00000000-0000-0000-0000-{:012}", next_id()),
            aspects: 0,
            emeralds: 0,
            raids: 0,
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }

    pub fn aspects(mut self, aspects: i64) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn emeralds(mut self, emeralds: i64) -> Self {
        self.emeralds = emeralds;
        self
    }

    pub fn raids(mut self, raids: i64) -> Self {
        self.raids = raids;
        self
    }

    /// Builds and inserts the aspect row.
    pub async fn build(self) -> Result<entity::aspect::Model, DbErr> {
        entity::aspect::ActiveModel {
            uuid: ActiveValue::Set(self.uuid),
            aspects: ActiveValue::Set(self.aspects),
            emeralds: ActiveValue::Set(self.emeralds),
            raids: ActiveValue::Set(self.raids),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an aspect row with default values.
pub async fn create_aspect(db: &DatabaseConnection) -> Result<entity::aspect::Model, DbErr> {
    AspectFactory::new(db).build().await
}

//! Validation record factory.
//!
//! Validation records are the shared list of guilds allowed to own a tenant database.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating validation records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::validation::ValidationFactory;
///
/// let record = ValidationFactory::new(&db)
///     .wynn_guild_name("Iron Co")
///     .wynn_guild_id("g-1")
///     .build()
///     .await?;
/// ```
pub struct ValidationFactory<'a> {
    db: &'a DatabaseConnection,
    wynn_guild_name: String,
    wynn_guild_id: String,
}

impl<'a> ValidationFactory<'a> {
    /// Creates a new ValidationFactory with default values.
    ///
    /// Defaults:
    /// - wynn_guild_name: `"Guild {id}"`
    /// - wynn_guild_id: `"guild-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            wynn_guild_name: format!("Guild {}", id),
            wynn_guild_id: format!("guild-{}", id),
        }
    }

    /// Sets the guild display name.
    pub fn wynn_guild_name(mut self, name: impl Into<String>) -> Self {
        self.wynn_guild_name = name.into();
        self
    }

    /// Sets the upstream guild identifier.
    pub fn wynn_guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.wynn_guild_id = guild_id.into();
        self
    }

    /// Builds and inserts the validation record.
    ///
    /// # Returns
    /// - `Ok(entity::validation::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::validation::Model, DbErr> {
        entity::validation::ActiveModel {
            wynn_guild_name: ActiveValue::Set(self.wynn_guild_name),
            wynn_guild_id: ActiveValue::Set(self.wynn_guild_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a validation record with default values.
pub async fn create_validation(
    db: &DatabaseConnection,
) -> Result<entity::validation::Model, DbErr> {
    ValidationFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_records() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Validation)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_validation(db).await?;
        let second = create_validation(db).await?;

        assert_ne!(first.wynn_guild_id, second.wynn_guild_id);
        assert_ne!(first.wynn_guild_name, second.wynn_guild_name);

        Ok(())
    }
}

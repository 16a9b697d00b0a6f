use sea_orm::SqlErr;

use crate::{
    model::tome::{TomeDto, TomePositionDto},
    server::{
        error::AppError, model::tome::TomeEntry, service::resolve_store,
        tenant::registry::TenantRegistry,
    },
};

pub struct TomeService<'a> {
    registry: &'a TenantRegistry,
}

impl<'a> TomeService<'a> {
    pub fn new(registry: &'a TenantRegistry) -> Self {
        Self { registry }
    }

    /// Returns a guild's tome list in the order players were added.
    pub async fn get_all(&self, guild_id: &str) -> Result<Vec<TomeDto>, AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        let entries = store.tome().list().await?;

        Ok(entries.into_iter().map(to_dto).collect())
    }

    /// Adds a player to the end of a guild's tome list.
    ///
    /// # Returns
    /// - `Ok(TomeDto)` - The created entry
    /// - `Err(AppError::NotFound)` - Unknown guild
    /// - `Err(AppError::BadRequest)` - Blank username, or the player is already listed
    pub async fn add(&self, guild_id: &str, username: &str) -> Result<TomeDto, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username is required.".to_string()));
        }

        let store = resolve_store(self.registry, guild_id).await?;

        if store.tome().find(username).await?.is_some() {
            return Err(already_listed());
        }

        // A concurrent add of the same player can still win between the lookup and the
        // insert; the unique username index rejects the loser.
        let entry = match store.tome().insert(username).await {
            Ok(entry) => entry,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(already_listed());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("{} added to tome list of guild {}", entry.username, guild_id);

        Ok(to_dto(entry))
    }

    /// Returns a player's 1-based place in the tome queue.
    pub async fn get_position(
        &self,
        guild_id: &str,
        username: &str,
    ) -> Result<TomePositionDto, AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        let Some(entry) = store.tome().find(username).await? else {
            return Err(AppError::NotFound(
                "Specified user could not be found in tome list.".to_string(),
            ));
        };

        let position = store.tome().count_added_before(&entry).await? + 1;

        Ok(TomePositionDto {
            username: entry.username,
            position,
        })
    }

    pub async fn remove(&self, guild_id: &str, username: &str) -> Result<(), AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        if !store.tome().delete(username).await? {
            return Err(AppError::NotFound(
                "User could not be found in tome list.".to_string(),
            ));
        }

        Ok(())
    }
}

fn already_listed() -> AppError {
    AppError::BadRequest("User already in tome list.".to_string())
}

fn to_dto(entry: TomeEntry) -> TomeDto {
    TomeDto {
        username: entry.username,
        date_added: entry.date_added,
    }
}

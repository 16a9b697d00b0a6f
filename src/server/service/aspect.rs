use crate::{
    model::aspect::AspectDto,
    server::{
        error::AppError, model::aspect::AspectRecord, service::resolve_store,
        tenant::registry::TenantRegistry,
    },
};

/// Size of the aspect leaderboard.
const LEADERBOARD_SIZE: u64 = 10;

pub struct AspectService<'a> {
    registry: &'a TenantRegistry,
}

impl<'a> AspectService<'a> {
    pub fn new(registry: &'a TenantRegistry) -> Self {
        Self { registry }
    }

    /// Returns the members of a guild with the most aspects.
    pub async fn get_leaderboard(&self, guild_id: &str) -> Result<Vec<AspectDto>, AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        let records = store
            .aspects()
            .top(LEADERBOARD_SIZE)
            .await?
            .into_iter()
            .map(to_dto)
            .collect();

        Ok(records)
    }

    pub async fn get(&self, guild_id: &str, uuid: &str) -> Result<AspectDto, AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        let Some(record) = store.aspects().find(uuid).await? else {
            return Err(AppError::NotFound(format!(
                "No aspect record for player {}",
                uuid
            )));
        };

        Ok(to_dto(record))
    }

    /// Adds `delta` aspects to a member, which may be negative when aspects are handed out.
    pub async fn adjust(
        &self,
        guild_id: &str,
        uuid: &str,
        delta: i64,
    ) -> Result<AspectDto, AppError> {
        let store = resolve_store(self.registry, guild_id).await?;

        let record = store.aspects().add_aspects(uuid, delta).await?;

        tracing::info!(
            "Adjusted aspects of {} in guild {} by {} to {}",
            uuid,
            guild_id,
            delta,
            record.aspects
        );

        Ok(to_dto(record))
    }

    /// Records one aspect handed out to each listed member.
    ///
    /// # Returns
    /// - `Ok(Vec<AspectDto>)` - Updated record of each listed member
    /// - `Err(AppError::NotFound)` - Unknown guild
    /// - `Err(AppError::BadRequest)` - Empty or blank member list
    pub async fn give(
        &self,
        guild_id: &str,
        users: &[String],
    ) -> Result<Vec<AspectDto>, AppError> {
        if users.is_empty() || users.iter().any(|uuid| uuid.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "A non-empty list of players is required.".to_string(),
            ));
        }

        let store = resolve_store(self.registry, guild_id).await?;

        let records = store.aspects().give_aspects(users).await?;

        tracing::info!("Gave {} aspects in guild {}", records.len(), guild_id);

        Ok(records.into_iter().map(to_dto).collect())
    }
}

fn to_dto(record: AspectRecord) -> AspectDto {
    AspectDto {
        uuid: record.uuid,
        aspects: record.aspects,
        emeralds: record.emeralds,
        raids: record.raids,
    }
}

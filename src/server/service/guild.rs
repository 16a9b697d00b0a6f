use crate::{
    model::guild::{GuildDto, RegisterGuildDto},
    server::{
        error::AppError,
        tenant::{name::derive_database_name, provisioner::TenantProvisioner},
    },
};

pub struct GuildService<'a> {
    provisioner: &'a TenantProvisioner,
}

impl<'a> GuildService<'a> {
    pub fn new(provisioner: &'a TenantProvisioner) -> Self {
        Self { provisioner }
    }

    /// Lists every provisioned guild, ordered by guild id.
    pub async fn get_all(&self) -> Result<Vec<GuildDto>, AppError> {
        let guilds = self
            .provisioner
            .registry()
            .guild_names()
            .await
            .into_iter()
            .map(|(guild_id, name)| GuildDto { guild_id, name })
            .collect();

        Ok(guilds)
    }

    /// Provisions a guild database for a guild that was not known at startup.
    ///
    /// The display name goes through the same space → `+` derivation as bootstrap, so a
    /// guild registered here and later found in the validation records is recognized as
    /// the same tenant.
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - The guild was provisioned and registered
    /// - `Err(AppError::BadRequest)` - Name or id is blank
    /// - `Err(AppError::TenantErr)` - Already registered, or provisioning failed
    pub async fn register(&self, params: RegisterGuildDto) -> Result<GuildDto, AppError> {
        let name = derive_database_name(params.name.trim());
        let guild_id = params.guild_id.trim().to_string();

        if name.is_empty() || guild_id.is_empty() {
            return Err(AppError::BadRequest(
                "Guild name and guild id are required.".to_string(),
            ));
        }

        self.provisioner.register_one(&name, &guild_id).await?;

        Ok(GuildDto { guild_id, name })
    }
}

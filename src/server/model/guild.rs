/// A guild known to the service: its upstream id and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuildIdentity {
    /// Stable identifier assigned by the game world.
    pub guild_id: String,
    /// Display name. Also unique, but may change upstream.
    pub guild_name: String,
}

impl GuildIdentity {
    pub fn new(guild_id: impl Into<String>, guild_name: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            guild_name: guild_name.into(),
        }
    }

    /// Converts a validation record at the repository boundary.
    ///
    /// The name is kept as stored; database name derivation happens during provisioning.
    pub fn from_entity(entity: entity::validation::Model) -> Self {
        Self {
            guild_id: entity.wynn_guild_id,
            guild_name: entity.wynn_guild_name,
        }
    }
}

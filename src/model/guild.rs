use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GuildDto {
    pub guild_id: String,
    pub name: String,
}

/// Body of an admin request to onboard a guild that was not known at startup.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGuildDto {
    /// Display name; spaces are replaced with `+` before registration.
    pub name: String,
    pub guild_id: String,
}

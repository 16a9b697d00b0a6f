use crate::server::{
    error::{config::ConfigError, AppError},
    tenant::connection::TenantStorage,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    /// Shared database holding the validation records.
    pub database_url: String,

    /// Where per-guild databases are created.
    pub tenant_storage: TenantStorage,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            tenant_storage: std::env::var("TENANT_STORAGE")
                .map(|setting| TenantStorage::from_setting(&setting))
                .unwrap_or_default(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

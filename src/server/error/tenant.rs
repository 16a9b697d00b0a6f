use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a tenant registration or provisioning request.
///
/// Both variants leave the tenant registry exactly as it was before the call.
#[derive(Error, Debug)]
pub enum TenantError {
    /// The guild name or guild id already has a tenant database.
    ///
    /// Recoverable; callers treat it as success-equivalent or surface it as a conflict.
    #[error(transparent)]
    AlreadyRegistered(#[from] RegistrationConflict),

    /// The tenant database could not be opened or its collections could not be built.
    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),
}

/// Which registry key an attempted registration collided with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationConflict {
    /// Another tenant is already registered under this guild name.
    #[error("Guild name '{guild_name}' is already registered")]
    NameTaken { guild_name: String },

    /// This guild id is already registered under a different name.
    #[error("Guild id '{guild_id}' is already registered as '{existing_name}'")]
    IdTaken {
        guild_id: String,
        existing_name: String,
    },
}

/// Failure while building a tenant database.
#[derive(Error, Debug)]
pub enum ProvisioningError {
    /// The derived logical database name is not acceptable to the underlying store.
    #[error("Invalid tenant database name '{name}': {reason}")]
    InvalidDatabaseName { name: String, reason: &'static str },

    /// Opening the logical database failed.
    #[error("Failed to open tenant database '{name}': {source}")]
    Connect {
        name: String,
        #[source]
        source: DbErr,
    },

    /// Creating a collection inside the tenant database failed.
    #[error("Failed to create collection '{collection}': {source}")]
    BindCollection {
        collection: &'static str,
        #[source]
        source: DbErr,
    },

    /// The collection was created but could not be read back.
    #[error("Collection '{collection}' is not readable after creation: {source}")]
    MissingCollection {
        collection: &'static str,
        #[source]
        source: DbErr,
    },

    /// Reading the validation record set failed.
    #[error("Failed to read validation records: {0}")]
    ReadValidation(#[source] DbErr),
}

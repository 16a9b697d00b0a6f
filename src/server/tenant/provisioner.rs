//! Populates the tenant registry.
//!
//! `bootstrap` seeds the registry from the validation record set at startup;
//! `register_one` onboards a single guild at any later point. Both go through the
//! same path, which is the only way stores enter the registry.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    error::tenant::{ProvisioningError, RegistrationConflict, TenantError},
    model::guild::GuildIdentity,
    tenant::{
        connection::StoreConnection,
        lock::KeyedLocks,
        name::{derive_database_name, DatabaseName},
        registry::TenantRegistry,
        store::TenantStoreFactory,
    },
};

/// Source of the authoritative list of guilds allowed to own a tenant database.
#[async_trait]
pub trait ValidationSource: Send + Sync {
    async fn read_all(&self) -> Result<Vec<GuildIdentity>, DbErr>;
}

/// Per-record outcome of a bootstrap run.
///
/// Identities carry the derived database name, not the raw validation record name.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    pub registered: Vec<GuildIdentity>,
    pub skipped: Vec<(GuildIdentity, RegistrationConflict)>,
    pub failed: Vec<(GuildIdentity, ProvisioningError)>,
}

impl BootstrapReport {
    /// Number of validation records processed.
    pub fn total(&self) -> usize {
        self.registered.len() + self.skipped.len() + self.failed.len()
    }
}

pub struct TenantProvisioner {
    connection: Arc<dyn StoreConnection>,
    validation: Arc<dyn ValidationSource>,
    registry: Arc<TenantRegistry>,
    factory: TenantStoreFactory,
    locks: KeyedLocks,
}

impl TenantProvisioner {
    pub fn new(
        connection: Arc<dyn StoreConnection>,
        validation: Arc<dyn ValidationSource>,
        registry: Arc<TenantRegistry>,
    ) -> Self {
        Self {
            connection,
            validation,
            registry,
            factory: TenantStoreFactory::new(),
            locks: KeyedLocks::new(),
        }
    }

    pub fn registry(&self) -> &Arc<TenantRegistry> {
        &self.registry
    }

    /// Provisions a tenant for every validation record.
    ///
    /// Database names are derived by replacing spaces with `+`. A failure for one
    /// record does not stop the others; every outcome is listed in the report.
    ///
    /// # Returns
    /// - `Ok(BootstrapReport)` - Every record was attempted
    /// - `Err(ProvisioningError::ReadValidation)` - The validation records could not be read
    pub async fn bootstrap(&self) -> Result<BootstrapReport, ProvisioningError> {
        let records = self
            .validation
            .read_all()
            .await
            .map_err(ProvisioningError::ReadValidation)?;

        let mut report = BootstrapReport::default();

        for record in records {
            let identity = GuildIdentity::new(
                record.guild_id,
                derive_database_name(&record.guild_name),
            );

            match self
                .register_one(&identity.guild_name, &identity.guild_id)
                .await
            {
                Ok(()) => report.registered.push(identity),
                Err(TenantError::AlreadyRegistered(conflict)) => {
                    tracing::warn!("Skipping already registered guild: {}", conflict);
                    report.skipped.push((identity, conflict));
                }
                Err(TenantError::Provisioning(err)) => {
                    tracing::error!(
                        "Failed to provision guild {} ({}): {}",
                        identity.guild_name,
                        identity.guild_id,
                        err
                    );
                    report.failed.push((identity, err));
                }
            }
        }

        tracing::info!(
            "Registered guilds ({} of {}): {:?}",
            self.registry.len().await,
            report.total(),
            self.registry.guild_names().await
        );

        Ok(report)
    }

    /// Provisions and registers a single guild.
    ///
    /// Calls for the same name or id are serialized; a caller that loses the race sees
    /// `AlreadyRegistered`. Calls for different guilds build their stores in parallel.
    ///
    /// # Arguments
    /// - `name` - Logical database name, which is also the registered guild name
    /// - `guild_id` - Upstream guild identifier
    ///
    /// # Returns
    /// - `Ok(())` - The guild now has a tenant store
    /// - `Err(TenantError::AlreadyRegistered)` - The name or id is already registered
    /// - `Err(TenantError::Provisioning)` - The store could not be built; registry unchanged
    pub async fn register_one(&self, name: &str, guild_id: &str) -> Result<(), TenantError> {
        if self.registry.has(name).await {
            return Err(RegistrationConflict::NameTaken {
                guild_name: name.to_string(),
            }
            .into());
        }

        let database_name = DatabaseName::parse(name)?;

        // Always id before name, so two callers can never wait on each other.
        let _id_guard = self.locks.lock(format!("id:{}", guild_id)).await;
        let _name_guard = self.locks.lock(format!("name:{}", name)).await;

        self.check_available(name, guild_id).await?;

        let database = self.connection.open(&database_name).await?;
        let store = self.factory.create_store(database).await?;

        self.registry.register(guild_id, name, store).await?;

        tracing::info!("Registered guild database {} for guild {}", name, guild_id);

        Ok(())
    }

    async fn check_available(
        &self,
        name: &str,
        guild_id: &str,
    ) -> Result<(), RegistrationConflict> {
        if self.registry.has(name).await {
            return Err(RegistrationConflict::NameTaken {
                guild_name: name.to_string(),
            });
        }
        if let Some(existing_name) = self.registry.guild_name(guild_id).await {
            return Err(RegistrationConflict::IdTaken {
                guild_id: guild_id.to_string(),
                existing_name,
            });
        }

        Ok(())
    }
}

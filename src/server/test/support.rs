//! Test doubles for the tenant layer's external inputs.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    error::tenant::ProvisioningError,
    model::guild::GuildIdentity,
    tenant::{
        connection::{LogicalDatabase, SqliteStoreConnection, StoreConnection, TenantStorage},
        name::DatabaseName,
        provisioner::{TenantProvisioner, ValidationSource},
        registry::TenantRegistry,
        store::{TenantStore, TenantStoreFactory},
    },
};

/// Builds a tenant store over a fresh in-memory database.
pub async fn memory_store(name: &str) -> TenantStore {
    let name = DatabaseName::parse(name).unwrap();
    let database = SqliteStoreConnection::new(TenantStorage::Memory)
        .open(&name)
        .await
        .unwrap();

    TenantStoreFactory::new().create_store(database).await.unwrap()
}

/// In-memory store connection that counts opens and can reject a name or delay every open.
pub struct TestStoreConnection {
    inner: SqliteStoreConnection,
    rejected: Option<String>,
    delay: Option<Duration>,
    opens: AtomicUsize,
}

impl TestStoreConnection {
    pub fn new() -> Self {
        Self {
            inner: SqliteStoreConnection::new(TenantStorage::Memory),
            rejected: None,
            delay: None,
            opens: AtomicUsize::new(0),
        }
    }

    /// Fails every open of `name` as the underlying store would.
    pub fn rejecting(name: &str) -> Self {
        Self {
            rejected: Some(name.to_string()),
            ..Self::new()
        }
    }

    /// Sleeps before every open, holding the provisioning path at its I/O point.
    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreConnection for TestStoreConnection {
    async fn open(&self, name: &DatabaseName) -> Result<LogicalDatabase, ProvisioningError> {
        self.opens.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.rejected.as_deref() == Some(name.as_str()) {
            return Err(ProvisioningError::Connect {
                name: name.to_string(),
                source: DbErr::Custom("database name rejected by store".to_string()),
            });
        }

        self.inner.open(name).await
    }
}

/// Validation records held in memory, as `(wynn_guild_name, wynn_guild_id)` pairs.
pub struct StaticValidationSource(pub Vec<GuildIdentity>);

impl StaticValidationSource {
    pub fn new(records: &[(&str, &str)]) -> Self {
        Self(
            records
                .iter()
                .map(|(name, id)| GuildIdentity::new(*id, *name))
                .collect(),
        )
    }
}

#[async_trait]
impl ValidationSource for StaticValidationSource {
    async fn read_all(&self) -> Result<Vec<GuildIdentity>, DbErr> {
        Ok(self.0.clone())
    }
}

pub struct FailingValidationSource;

#[async_trait]
impl ValidationSource for FailingValidationSource {
    async fn read_all(&self) -> Result<Vec<GuildIdentity>, DbErr> {
        Err(DbErr::Custom("validation collection unavailable".to_string()))
    }
}

/// Provisioner over `connection` seeded with `records`, with a fresh registry.
pub fn provisioner(
    connection: Arc<TestStoreConnection>,
    records: &[(&str, &str)],
) -> TenantProvisioner {
    TenantProvisioner::new(
        connection,
        Arc::new(StaticValidationSource::new(records)),
        Arc::new(TenantRegistry::new()),
    )
}

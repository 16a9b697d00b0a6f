//! Access to the underlying store that hosts one logical database per guild.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{error::tenant::ProvisioningError, tenant::name::DatabaseName};

/// Directory used when `TENANT_STORAGE` is unset or blank.
pub const DEFAULT_TENANT_DIRECTORY: &str = "data/guilds";

/// In-memory databases disappear with their last connection, so the single pooled
/// connection is kept open for as long as the process is likely to live.
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// An open logical database reserved for exactly one tenant.
///
/// Not `Clone`: the store factory consumes it, so one handle can never back two tenants.
#[derive(Debug)]
pub struct LogicalDatabase {
    name: DatabaseName,
    conn: DatabaseConnection,
}

impl LogicalDatabase {
    pub fn new(name: DatabaseName, conn: DatabaseConnection) -> Self {
        Self { name, conn }
    }

    pub fn into_parts(self) -> (DatabaseName, DatabaseConnection) {
        (self.name, self.conn)
    }
}

/// Shared connection to the underlying store.
///
/// Implementations produce an isolated logical database for a given name. Opening the
/// same name twice yields two handles onto the same storage, so callers must serialize
/// provisioning per name.
#[async_trait]
pub trait StoreConnection: Send + Sync {
    async fn open(&self, name: &DatabaseName) -> Result<LogicalDatabase, ProvisioningError>;
}

/// Where tenant databases are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantStorage {
    /// A private in-memory SQLite database per tenant. Contents do not survive restarts,
    /// so this is only chosen when `TENANT_STORAGE=memory` is set explicitly.
    Memory,
    /// One `<name>.sqlite` file per tenant inside this directory.
    Directory(PathBuf),
}

impl Default for TenantStorage {
    fn default() -> Self {
        TenantStorage::Directory(PathBuf::from(DEFAULT_TENANT_DIRECTORY))
    }
}

impl TenantStorage {
    /// Parses the `TENANT_STORAGE` setting: `memory`, or a directory path.
    ///
    /// A blank setting selects the default directory.
    pub fn from_setting(setting: &str) -> Self {
        match setting.trim() {
            "" => TenantStorage::default(),
            "memory" => TenantStorage::Memory,
            path => TenantStorage::Directory(PathBuf::from(path)),
        }
    }
}

/// SQLite-backed [`StoreConnection`].
#[derive(Debug, Clone)]
pub struct SqliteStoreConnection {
    storage: TenantStorage,
}

impl SqliteStoreConnection {
    pub fn new(storage: TenantStorage) -> Self {
        Self { storage }
    }

    fn connect_options(&self, name: &DatabaseName) -> ConnectOptions {
        match &self.storage {
            TenantStorage::Memory => {
                let mut opt = ConnectOptions::new("sqlite::memory:");
                opt.sqlx_logging(false)
                    .max_connections(1)
                    .min_connections(1)
                    .max_lifetime(MEMORY_CONNECTION_LIFETIME);
                opt
            }
            TenantStorage::Directory(dir) => {
                let path = dir.join(format!("{}.sqlite", name));
                let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
                opt.sqlx_logging(false);
                opt
            }
        }
    }
}

#[async_trait]
impl StoreConnection for SqliteStoreConnection {
    async fn open(&self, name: &DatabaseName) -> Result<LogicalDatabase, ProvisioningError> {
        let conn = Database::connect(self.connect_options(name))
            .await
            .map_err(|source| ProvisioningError::Connect {
                name: name.to_string(),
                source,
            })?;

        Ok(LogicalDatabase::new(name.clone(), conn))
    }
}

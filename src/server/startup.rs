use std::sync::Arc;

use crate::server::{
    config::Config,
    data::validation::ValidationRepository,
    error::AppError,
    tenant::{
        connection::{SqliteStoreConnection, TenantStorage},
        provisioner::{BootstrapReport, TenantProvisioner},
        registry::TenantRegistry,
    },
};

/// Connects to the shared Sqlite database and runs pending migrations.
///
/// The shared database holds the validation records. Guild databases are separate and
/// are created by the tenant provisioner, not by migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Prepares the underlying store for guild databases.
///
/// Creates the storage directory when guild databases are kept on disk.
pub async fn connect_to_tenant_storage(config: &Config) -> Result<SqliteStoreConnection, AppError> {
    if let TenantStorage::Directory(dir) = &config.tenant_storage {
        tokio::fs::create_dir_all(dir).await?;
        tracing::info!("Storing guild databases in {}", dir.display());
    } else {
        tracing::warn!("Storing guild databases in memory; contents are lost on restart");
    }

    Ok(SqliteStoreConnection::new(config.tenant_storage.clone()))
}

/// Builds the tenant provisioner over an empty registry.
pub fn setup_provisioner(
    db: &sea_orm::DatabaseConnection,
    store_connection: SqliteStoreConnection,
) -> Arc<TenantProvisioner> {
    let registry = Arc::new(TenantRegistry::new());

    Arc::new(TenantProvisioner::new(
        Arc::new(store_connection),
        Arc::new(ValidationRepository::new(db.clone())),
        registry,
    ))
}

/// Provisions a tenant for every validation record.
///
/// Individual guild failures are logged by the provisioner and do not stop startup; only
/// a failure to read the validation records does.
pub async fn bootstrap_tenants(
    provisioner: &TenantProvisioner,
) -> Result<BootstrapReport, AppError> {
    let report = provisioner.bootstrap().await?;

    if provisioner.registry().is_empty().await {
        tracing::warn!("No guild databases were provisioned; every guild route will return 404");
    }
    if !report.failed.is_empty() {
        tracing::warn!(
            "{} of {} guild databases failed to provision",
            report.failed.len(),
            report.total()
        );
    }

    Ok(report)
}

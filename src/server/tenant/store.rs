use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{aspect::AspectCollection, tome::TomeCollection},
    error::tenant::ProvisioningError,
    tenant::{
        connection::LogicalDatabase,
        name::DatabaseName,
        schema::{collection_keys, CollectionKey, CollectionSpec, TENANT_SCHEMA},
    },
};

/// The bound collection handles of one guild database.
///
/// The set of collections is fixed when the store is built. Only the registry holds
/// stores; request handlers borrow them through `TenantRegistry::lookup`.
#[derive(Debug)]
pub struct TenantStore {
    database: DatabaseName,
    tome: TomeCollection,
    aspects: AspectCollection,
}

impl TenantStore {
    pub fn database_name(&self) -> &DatabaseName {
        &self.database
    }

    pub fn tome(&self) -> &TomeCollection {
        &self.tome
    }

    pub fn aspects(&self) -> &AspectCollection {
        &self.aspects
    }

    /// Keys of the collections bound in this store.
    pub fn collection_keys(&self) -> Vec<CollectionKey> {
        collection_keys().collect()
    }
}

/// Builds tenant stores from the declarative tenant schema set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TenantStoreFactory;

impl TenantStoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates every collection of the schema set inside `database` and binds a handle
    /// to each.
    ///
    /// Each collection is created if absent and then read back, so a returned store is
    /// known to have all of its collections. On error nothing is returned and the
    /// database connection is dropped.
    ///
    /// # Returns
    /// - `Ok(TenantStore)` - All collections exist and are bound
    /// - `Err(ProvisioningError::BindCollection)` - A collection could not be created
    /// - `Err(ProvisioningError::MissingCollection)` - A created collection could not be read
    pub async fn create_store(
        &self,
        database: LogicalDatabase,
    ) -> Result<TenantStore, ProvisioningError> {
        let (name, conn) = database.into_parts();

        let mut tome = None;
        let mut aspects = None;

        for spec in TENANT_SCHEMA {
            materialize(&conn, spec).await?;

            match spec.key {
                CollectionKey::Tome => tome = Some(TomeCollection::new(conn.clone())),
                CollectionKey::Aspects => aspects = Some(AspectCollection::new(conn.clone())),
            }
        }

        let tome = tome.ok_or_else(|| unbound(CollectionKey::Tome))?;
        let aspects = aspects.ok_or_else(|| unbound(CollectionKey::Aspects))?;

        Ok(TenantStore {
            database: name,
            tome,
            aspects,
        })
    }
}

async fn materialize(
    conn: &DatabaseConnection,
    spec: &CollectionSpec,
) -> Result<(), ProvisioningError> {
    let collection = spec.key.as_str();

    conn.execute(&spec.create_statement())
        .await
        .map_err(|source| ProvisioningError::BindCollection { collection, source })?;

    for index in spec.index_statements() {
        conn.execute(&index)
            .await
            .map_err(|source| ProvisioningError::BindCollection { collection, source })?;
    }

    conn.query_one(&spec.probe_statement())
        .await
        .map_err(|source| ProvisioningError::MissingCollection { collection, source })?;

    Ok(())
}

fn unbound(key: CollectionKey) -> ProvisioningError {
    ProvisioningError::MissingCollection {
        collection: key.as_str(),
        source: sea_orm::DbErr::Custom("collection is not part of the tenant schema".to_string()),
    }
}

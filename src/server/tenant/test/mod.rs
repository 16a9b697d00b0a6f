use std::{sync::Arc, time::Duration};

use crate::server::{
    error::tenant::{ProvisioningError, RegistrationConflict, TenantError},
    tenant::{
        connection::{SqliteStoreConnection, StoreConnection, TenantStorage},
        name::DatabaseName,
        registry::TenantRegistry,
        schema::{collection_keys, CollectionKey, TENANT_SCHEMA},
        store::TenantStoreFactory,
    },
    test::support::{self, memory_store, TestStoreConnection},
};

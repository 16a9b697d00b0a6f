//! Process-wide directory of provisioned guild databases.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use tokio::sync::RwLock;

use crate::server::{error::tenant::RegistrationConflict, tenant::store::TenantStore};

/// The three maps are only ever touched together under one lock, so a reader sees either
/// all of a registration or none of it.
#[derive(Debug, Default)]
struct RegistryMaps {
    stores: HashMap<String, Arc<TenantStore>>,
    id_to_name: HashMap<String, String>,
    name_to_id: HashMap<String, String>,
}

/// Maps guild ids to their tenant stores, and guild ids to names and back.
///
/// Created empty at startup and shared through `AppState` for the life of the process.
/// Entries are only added, by `TenantProvisioner`; there is no removal.
#[derive(Debug, Default)]
pub struct TenantRegistry {
    maps: RwLock<RegistryMaps>,
}

impl TenantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store of a provisioned guild, or `None` if the guild has no tenant yet.
    pub async fn lookup(&self, guild_id: &str) -> Option<Arc<TenantStore>> {
        self.maps.read().await.stores.get(guild_id).cloned()
    }

    /// Whether a tenant is registered under `guild_name`.
    pub async fn has(&self, guild_name: &str) -> bool {
        self.maps.read().await.name_to_id.contains_key(guild_name)
    }

    pub async fn guild_name(&self, guild_id: &str) -> Option<String> {
        self.maps.read().await.id_to_name.get(guild_id).cloned()
    }

    #[cfg(test)]
    pub async fn guild_id(&self, guild_name: &str) -> Option<String> {
        self.maps.read().await.name_to_id.get(guild_name).cloned()
    }

    /// Snapshot of the id → name mapping, ordered by id.
    pub async fn guild_names(&self) -> BTreeMap<String, String> {
        self.maps
            .read()
            .await
            .id_to_name
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.maps.read().await.stores.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Installs `store` under `guild_id` and `guild_name`.
    ///
    /// # Returns
    /// - `Ok(())` - All three maps were updated
    /// - `Err(RegistrationConflict::NameTaken)` - The name is already registered
    /// - `Err(RegistrationConflict::IdTaken)` - The id is already registered under another name
    ///
    /// On error the registry is unchanged and `store` is dropped.
    pub async fn register(
        &self,
        guild_id: &str,
        guild_name: &str,
        store: TenantStore,
    ) -> Result<(), RegistrationConflict> {
        let mut maps = self.maps.write().await;

        if maps.name_to_id.contains_key(guild_name) {
            return Err(RegistrationConflict::NameTaken {
                guild_name: guild_name.to_string(),
            });
        }
        if let Some(existing_name) = maps.id_to_name.get(guild_id) {
            return Err(RegistrationConflict::IdTaken {
                guild_id: guild_id.to_string(),
                existing_name: existing_name.clone(),
            });
        }

        maps.stores.insert(guild_id.to_string(), Arc::new(store));
        maps.id_to_name.insert(guild_id.to_string(), guild_name.to_string());
        maps.name_to_id.insert(guild_name.to_string(), guild_id.to_string());

        Ok(())
    }

    /// Checks that every map agrees with the others.
    #[cfg(test)]
    pub async fn is_consistent(&self) -> bool {
        let maps = self.maps.read().await;

        maps.stores.len() == maps.id_to_name.len()
            && maps.id_to_name.len() == maps.name_to_id.len()
            && maps.id_to_name.iter().all(|(id, name)| {
                maps.stores.contains_key(id) && maps.name_to_id.get(name) == Some(id)
            })
    }
}

//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. All fields are cheap to clone.

use std::sync::Arc;

use crate::server::tenant::{provisioner::TenantProvisioner, registry::TenantRegistry};

#[derive(Clone)]
pub struct AppState {
    /// Directory of provisioned guild databases. Handlers resolve a guild through it
    /// before touching any per-guild record.
    pub registry: Arc<TenantRegistry>,

    /// Onboards guilds that were not known at startup.
    pub provisioner: Arc<TenantProvisioner>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// The registry is taken from the provisioner so both always refer to the same one.
    pub fn new(provisioner: Arc<TenantProvisioner>) -> Self {
        Self {
            registry: provisioner.registry().clone(),
            provisioner,
        }
    }
}

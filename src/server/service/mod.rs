//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! Every per-guild service resolves the guild's tenant store through the registry before
//! reading or writing any record.

pub mod aspect;
pub mod guild;
pub mod tome;

use std::sync::Arc;

use crate::server::{
    error::AppError,
    tenant::{registry::TenantRegistry, store::TenantStore},
};

/// Looks up the tenant store of a guild, mapping an unknown guild to 404.
pub async fn resolve_store(
    registry: &TenantRegistry,
    guild_id: &str,
) -> Result<Arc<TenantStore>, AppError> {
    registry
        .lookup(guild_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Guild with ID {} not found", guild_id)))
}

//! Per-guild tenant databases.
//!
//! Every guild known to the service gets its own logical database holding the same
//! fixed set of collections. The pieces, leaf first:
//!
//! - **schema** - Declarative list of per-guild collections and their field constraints
//! - **name** - Derivation and validation of logical database names
//! - **connection** - The underlying store that opens a logical database by name
//! - **store** - `TenantStore` and the factory that builds one from a logical database
//! - **registry** - Process-wide guild id → store directory with the id ↔ name mapping
//! - **provisioner** - Startup bootstrap from validation records and single-guild onboarding
//!
//! Request handlers only ever call `TenantRegistry::lookup`; everything else is driven by
//! startup or by the admin onboarding route.

pub mod connection;
pub mod lock;
pub mod name;
pub mod provisioner;
pub mod registry;
pub mod schema;
pub mod store;

#[cfg(test)]
mod test;

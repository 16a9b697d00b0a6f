//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. Each
//! guild has its own logical database; the `tenant` module provisions those databases and
//! resolves a guild id to its store.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, guild store resolution
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models
//! - **Tenant Layer** (`tenant/`) - Per-guild database provisioning and the tenant registry
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (shared DB, tenant registry, provisioner)
//! - **Startup** (`startup`) - Database connection, tenant storage and registry bootstrap
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts path and body, calls service
//! 3. **Service** resolves the guild's tenant store through the registry (404 if unknown)
//! 4. **Data** queries the guild's collections, converts entities to domain models
//! 5. **Controller** returns the DTO produced by the service

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod tenant;

#[cfg(test)]
mod test;

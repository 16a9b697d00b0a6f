//! SeaORM entity models.
//!
//! `validation` lives in the shared database. `tome` and `aspect` are the
//! per-guild collections; their tables are created inside every tenant
//! database rather than by the shared migrations.

pub mod aspect;
pub mod prelude;
pub mod tome;
pub mod validation;

//! Database repository layer.
//!
//! `validation` reads the shared validation record set. `tome` and `aspect` are the
//! collection handles bound inside every guild database; a tenant store owns one of each.
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic.

pub mod aspect;
pub mod tome;
pub mod validation;

#[cfg(test)]
mod test;

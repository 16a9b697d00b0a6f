//! Domain models used between the service and data layers.
//!
//! These types decouple business logic from SeaORM entity models. Repositories convert
//! entities into these models at the data boundary.

pub mod aspect;
pub mod guild;
pub mod tome;

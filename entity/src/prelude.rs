pub use super::aspect::Entity as Aspect;
pub use super::tome::Entity as Tome;
pub use super::validation::Entity as Validation;

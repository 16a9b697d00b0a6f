//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let record = factory::validation::create_validation(&db).await?;
//!     let entry = factory::tome::TomeFactory::new(&db)
//!         .username("Salted")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `validation` - Shared validation records naming known guilds
//! - `tome` - Tome list entries inside a guild database
//! - `aspect` - Aspect counters inside a guild database
//! - `helpers` - Unique id generation

pub mod aspect;
pub mod helpers;
pub mod tome;
pub mod validation;

pub use aspect::create_aspect;
pub use tome::create_tome;
pub use validation::create_validation;

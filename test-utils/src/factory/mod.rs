//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the identifiers of the rows they depend
//! on, and `helpers` builds whole dependency chains in one call.
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
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let partner = factory::partner::create_partner(&db, &user.id).await?;
//!
//!     // Create with all dependencies
//!     let (customer, owner, partner, product, order) =
//!         factory::helpers::create_order_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let courier = factory::user::UserFactory::new(&db)
//!     .id("k1")
//!     .role("courier")
//!     .build()
//!     .await?;
//! ```

pub mod delivery_location;
pub mod helpers;
pub mod order;
pub mod partner;
pub mod product;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use delivery_location::create_location;
pub use order::create_order;
pub use partner::create_partner;
pub use product::create_product;
pub use user::{create_courier, create_user};

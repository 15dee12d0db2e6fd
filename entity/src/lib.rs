//! SeaORM entity models for the marketplace schema.
//!
//! One module per table, mirroring the `migration` crate.

pub mod prelude;

pub mod customer_order;
pub mod delivery_location;
pub mod order_item;
pub mod partner;
pub mod product;
pub mod user;

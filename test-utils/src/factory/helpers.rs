//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete order hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Customer user
/// 2. Partner owner (role `partner`)
/// 3. Partner
/// 4. Product of that partner
/// 5. Pending order placed by the customer with one item of the product
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((customer, owner, partner, product, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::partner::Model,
        entity::product::Model,
        entity::customer_order::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::user::create_user(db).await?;
    let owner = crate::factory::user::UserFactory::new(db)
        .role("partner")
        .build()
        .await?;
    let partner = crate::factory::partner::create_partner(db, &owner.id).await?;
    let product = crate::factory::product::create_product(db, partner.id).await?;
    let order = crate::factory::order::OrderFactory::new(db, &customer.id, partner.id)
        .item(product.id, 1, product.price_cents)
        .build()
        .await?;

    Ok((customer, owner, partner, product, order))
}

/// Creates an order with a courier already assigned.
///
/// Builds the same hierarchy as `create_order_with_dependencies` plus a courier user,
/// and places the order in `accepted` status with that courier assigned.
///
/// # Returns
/// - `Ok((customer, owner, courier, order))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_assigned_order(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::user::Model,
        entity::customer_order::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::user::create_user(db).await?;
    let owner = crate::factory::user::UserFactory::new(db)
        .role("partner")
        .build()
        .await?;
    let courier = crate::factory::user::create_courier(db).await?;
    let partner = crate::factory::partner::create_partner(db, &owner.id).await?;
    let order = crate::factory::order::OrderFactory::new(db, &customer.id, partner.id)
        .courier(&courier.id)
        .status("accepted")
        .build()
        .await?;

    Ok((customer, owner, courier, order))
}

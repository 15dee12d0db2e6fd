//! Order service for business logic.
//!
//! Handles order placement with server-side pricing, role-scoped listing, visibility,
//! the status machine with its actor rules, and courier assignment.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        order::OrderRepository, partner::PartnerRepository, product::ProductRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        order::{CreateOrderParam, NewOrder, Order, OrderItem, OrderScope, OrderStatus},
        pagination::Page,
        user::{User, UserRole},
    },
};

/// Service providing business logic for orders.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new OrderService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order with a single partner.
    ///
    /// Every item must reference an available product of that partner. Unit prices are
    /// read from the catalog at this moment and the total is computed from them, so
    /// clients never supply prices.
    ///
    /// # Arguments
    /// - `param` - Customer, partner, delivery address, and requested items
    ///
    /// # Returns
    /// - `Ok(Order)` - Created order in `pending` status
    /// - `Err(AppError::BadRequest)` - Empty order, bad quantity, foreign or unavailable product
    /// - `Err(AppError::NotFound)` - Unknown partner
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        if param.items.is_empty() {
            return Err(AppError::BadRequest(
                "Order must contain at least one item".to_string(),
            ));
        }
        if param.delivery_address.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Delivery address must not be empty".to_string(),
            ));
        }
        if let Some(item) = param.items.iter().find(|item| item.quantity <= 0) {
            return Err(AppError::BadRequest(format!(
                "Quantity for product {} must be greater than zero",
                item.product_id
            )));
        }

        if PartnerRepository::new(self.db)
            .find_by_id(param.partner_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Partner not found".to_string()));
        }

        let product_ids: Vec<i32> = param
            .items
            .iter()
            .map(|item| item.product_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let products: HashMap<i32, _> = ProductRepository::new(self.db)
            .find_many(param.partner_id, &product_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut items = Vec::with_capacity(param.items.len());
        for requested in param.items {
            let Some(product) = products.get(&requested.product_id) else {
                return Err(AppError::BadRequest(format!(
                    "Product {} is not sold by this partner",
                    requested.product_id
                )));
            };
            if !product.available {
                return Err(AppError::BadRequest(format!(
                    "Product {} is not available",
                    product.id
                )));
            }

            items.push(OrderItem {
                product_id: product.id,
                quantity: requested.quantity,
                unit_price_cents: product.price_cents,
            });
        }

        let total_cents = items
            .iter()
            .try_fold(0i64, |total, item| {
                i64::from(item.quantity)
                    .checked_mul(item.unit_price_cents)
                    .and_then(|line| total.checked_add(line))
            })
            .ok_or_else(|| AppError::BadRequest("Order total is too large".to_string()))?;

        let order = OrderRepository::new(self.db)
            .create(NewOrder {
                customer_id: param.customer_id,
                partner_id: param.partner_id,
                delivery_address: param.delivery_address,
                total_cents,
                items,
            })
            .await?;

        tracing::info!(
            order_id = order.id,
            customer_id = %order.customer_id,
            partner_id = order.partner_id,
            "Order placed"
        );

        Ok(order)
    }

    /// Lists the orders the user may see, newest first.
    ///
    /// Admins see every order, couriers their assigned orders, partner users the orders
    /// of partners they own, and customers their own orders.
    pub async fn list_for_user(
        &self,
        user: &User,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Order>, AppError> {
        let scope = match user.role {
            UserRole::Admin => OrderScope::All,
            UserRole::Courier => OrderScope::Courier(user.id.clone()),
            UserRole::Partner => OrderScope::PartnerOwner(user.id.clone()),
            UserRole::Customer => OrderScope::Customer(user.id.clone()),
        };

        let (orders, total) = OrderRepository::new(self.db)
            .get_paginated(scope, page, per_page)
            .await?;

        Ok(Page::new(orders, total, page, per_page))
    }

    /// Checks whether the user is the partner owner of an order.
    pub async fn is_partner_owner(&self, order: &Order, user: &User) -> Result<bool, AppError> {
        let partner = PartnerRepository::new(self.db)
            .find_by_id(order.partner_id)
            .await?;

        Ok(partner.is_some_and(|p| p.owner_id == user.id))
    }

    /// Checks whether the user may see an order.
    ///
    /// Visible to the customer, the assigned courier, the owner of the order's partner,
    /// and admins.
    pub async fn is_visible_to(&self, order: &Order, user: &User) -> Result<bool, AppError> {
        if user.is_admin() || order.customer_id == user.id || order.is_assigned_to(&user.id) {
            return Ok(true);
        }

        self.is_partner_owner(order, user).await
    }

    /// Gets an order the user may see.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order with items
    /// - `Err(AppError::NotFound)` - Order does not exist or is not visible to the user
    pub async fn get_for_user(&self, user: &User, id: i32) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(order_not_found)?;

        if !self.is_visible_to(&order, user).await? {
            return Err(order_not_found());
        }

        Ok(order)
    }

    /// Moves an order to a new status.
    ///
    /// The transition must be allowed by the status machine and the user must be
    /// allowed to perform it:
    /// - `accepted` - partner owner
    /// - `picked_up`, `delivered` - assigned courier
    /// - `cancelled` - customer or partner owner
    ///
    /// Admins may perform any valid transition.
    ///
    /// # Returns
    /// - `Ok(Order)` - Updated order
    /// - `Err(AppError::NotFound)` - Order does not exist or is not visible to the user
    /// - `Err(AppError::BadRequest)` - Transition not allowed, or pickup without a courier
    /// - `Err(AppError::AuthErr(AccessDenied))` - User may see but not perform the transition
    /// - `Err(AppError::Conflict)` - Status changed between the read and the write
    pub async fn update_status(
        &self,
        user: &User,
        id: i32,
        next: OrderStatus,
    ) -> Result<Order, AppError> {
        let order = self.get_for_user(user, id).await?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "Cannot change order status from {} to {}",
                order.status, next
            )));
        }

        if next == OrderStatus::PickedUp && order.courier_id.is_none() {
            return Err(AppError::BadRequest(
                "Order has no courier assigned".to_string(),
            ));
        }

        let permitted = user.is_admin()
            || match next {
                OrderStatus::Accepted => self.is_partner_owner(&order, user).await?,
                OrderStatus::PickedUp | OrderStatus::Delivered => order.is_assigned_to(&user.id),
                OrderStatus::Cancelled => {
                    order.customer_id == user.id || self.is_partner_owner(&order, user).await?
                }
                OrderStatus::Pending => false,
            };

        if !permitted {
            return Err(AuthError::AccessDenied(
                user.id.clone(),
                format!("may not move order {} to {}", order.id, next),
            )
            .into());
        }

        let updated = OrderRepository::new(self.db)
            .update_status(id, order.status, next)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!(
                    "Order {} is no longer {}",
                    order.id, order.status
                ))
            })?;

        tracing::info!(
            order_id = updated.id,
            from = %order.status,
            to = %updated.status,
            actor = %user.id,
            "Order status changed"
        );

        Ok(updated)
    }

    /// Assigns a courier to an order.
    ///
    /// # Arguments
    /// - `user` - Partner owner of the order or an admin
    /// - `id` - Order to update
    /// - `courier_id` - User with the courier role
    ///
    /// # Returns
    /// - `Ok(Order)` - Updated order
    /// - `Err(AppError::NotFound)` - Order does not exist or is not visible to the user
    /// - `Err(AppError::BadRequest)` - Order is finished, or the assignee is not a courier
    /// - `Err(AppError::AuthErr(AccessDenied))` - User is neither partner owner nor admin
    /// - `Err(AppError::Conflict)` - Order finished between the read and the write
    pub async fn assign_courier(
        &self,
        user: &User,
        id: i32,
        courier_id: &str,
    ) -> Result<Order, AppError> {
        let order = self.get_for_user(user, id).await?;

        if !user.is_admin() && !self.is_partner_owner(&order, user).await? {
            return Err(AuthError::AccessDenied(
                user.id.clone(),
                format!("may not assign a courier to order {}", order.id),
            )
            .into());
        }

        if order.status.is_terminal() {
            return Err(AppError::BadRequest(format!(
                "Cannot assign a courier to a {} order",
                order.status
            )));
        }

        let courier = UserRepository::new(self.db).find_by_id(courier_id).await?;
        if !courier.is_some_and(|c| c.role == UserRole::Courier) {
            return Err(AppError::BadRequest(format!(
                "User {} is not a courier",
                courier_id
            )));
        }

        let updated = OrderRepository::new(self.db)
            .assign_courier(id, courier_id)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(format!("Order {} finished before assignment", order.id))
            })?;

        tracing::info!(order_id = updated.id, courier_id = %courier_id, "Courier assigned");

        Ok(updated)
    }
}

fn order_not_found() -> AppError {
    AppError::NotFound("Order not found".to_string())
}

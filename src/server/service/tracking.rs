//! Delivery tracking service.
//!
//! Authorizes relay subscriptions and publishes, and wraps the location store for the
//! relay and the REST companion endpoint.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{delivery_location::DeliveryLocationRepository, order::OrderRepository},
    error::AppError,
    model::{
        delivery_location::{DeliveryLocation, RecordLocationParam},
        user::User,
    },
    service::order::OrderService,
};

pub struct TrackingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the user may follow an order's courier.
    ///
    /// Follows the order visibility rules. Unknown orders are reported the same as
    /// hidden ones.
    pub async fn can_subscribe(&self, user: &User, order_id: i32) -> Result<bool, AppError> {
        let Some(order) = OrderRepository::new(self.db).find_by_id(order_id).await? else {
            return Ok(false);
        };

        OrderService::new(self.db).is_visible_to(&order, user).await
    }

    /// Checks whether the user may publish positions for `courier_id` on an order.
    ///
    /// `courier_id` must be the courier assigned to the order, and the user must be
    /// that courier or an admin. Delivered and cancelled orders accept no positions.
    pub async fn can_publish(
        &self,
        user: &User,
        order_id: i32,
        courier_id: &str,
    ) -> Result<bool, AppError> {
        let Some(order) = OrderRepository::new(self.db).find_by_id(order_id).await? else {
            return Ok(false);
        };

        Ok(!order.status.is_terminal()
            && order.is_assigned_to(courier_id)
            && (user.id == courier_id || user.is_admin()))
    }

    /// Appends a location record stamped with the server time.
    pub async fn record_location(
        &self,
        param: RecordLocationParam,
    ) -> Result<DeliveryLocation, AppError> {
        let location = DeliveryLocationRepository::new(self.db).save(param).await?;

        Ok(location)
    }

    /// Gets the latest stored location of an order, if any.
    pub async fn latest_location(
        &self,
        order_id: i32,
    ) -> Result<Option<DeliveryLocation>, AppError> {
        let location = DeliveryLocationRepository::new(self.db)
            .latest_for_order(order_id)
            .await?;

        Ok(location)
    }

    /// Gets the latest location of an order the user may see.
    ///
    /// # Returns
    /// - `Ok(DeliveryLocation)` - Latest record
    /// - `Err(AppError::NotFound)` - Order hidden or unknown, or nothing recorded yet
    pub async fn latest_for_user(
        &self,
        user: &User,
        order_id: i32,
    ) -> Result<DeliveryLocation, AppError> {
        OrderService::new(self.db)
            .get_for_user(user, order_id)
            .await?;

        self.latest_location(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No location recorded for this order".to_string()))
    }
}

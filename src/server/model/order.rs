//! Order domain models, status machine, and parameters.
//!
//! The status machine is `pending → accepted → picked_up → delivered`, with cancellation
//! allowed from `pending` and `accepted`. `delivered` and `cancelled` are terminal.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Accepted,
    PickedUp,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::PickedUp => "picked_up",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true once the order can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Checks whether the status machine allows moving from `self` to `next`.
    ///
    /// # Arguments
    /// - `next` - Requested status
    ///
    /// # Returns
    /// - `true` - Transition is part of the status machine
    /// - `false` - Transition skips a step, goes backwards, or leaves a terminal status
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted)
                | (Self::Accepted, Self::PickedUp)
                | (Self::PickedUp, Self::Delivered)
                | (Self::Pending, Self::Cancelled)
                | (Self::Accepted, Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "picked_up" => Ok(Self::PickedUp),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// Line item with the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            quantity: entity.quantity,
            unit_price_cents: entity.unit_price_cents,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
        }
    }
}

/// Customer order placed with a single partner.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer_id: String,
    pub partner_id: i32,
    /// Courier assigned to deliver the order, if any.
    pub courier_id: Option<String>,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub total_cents: i64,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an order entity and its item entities into a domain model.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored status is not recognized
    pub fn from_entity(
        entity: entity::customer_order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        let status = parse_stored("customer_order.status", entity.status)?;

        Ok(Self {
            id: entity.id,
            customer_id: entity.customer_id,
            partner_id: entity.partner_id,
            courier_id: entity.courier_id,
            status,
            delivery_address: entity.delivery_address,
            total_cents: entity.total_cents,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer_id: self.customer_id,
            partner_id: self.partner_id,
            courier_id: self.courier_id,
            status: self.status.to_string(),
            delivery_address: self.delivery_address,
            total_cents: self.total_cents,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Returns true when `user_id` is the courier assigned to this order.
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.courier_id.as_deref() == Some(user_id)
    }
}

/// Requested line item before prices are resolved.
#[derive(Debug, Clone)]
pub struct CreateOrderItemParam {
    pub product_id: i32,
    pub quantity: i32,
}

/// Parameters for placing an order.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub customer_id: String,
    pub partner_id: i32,
    pub delivery_address: String,
    pub items: Vec<CreateOrderItemParam>,
}

impl CreateOrderParam {
    pub fn from_dto(customer_id: String, dto: CreateOrderDto) -> Self {
        Self {
            customer_id,
            partner_id: dto.partner_id,
            delivery_address: dto.delivery_address,
            items: dto
                .items
                .into_iter()
                .map(|item| CreateOrderItemParam {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Priced order ready to be inserted by the repository.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: String,
    pub partner_id: i32,
    pub delivery_address: String,
    pub total_cents: i64,
    pub items: Vec<OrderItem>,
}

/// Which orders a caller may list.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderScope {
    All,
    Customer(String),
    Courier(String),
    /// Orders placed with any partner owned by this user.
    PartnerOwner(String),
}

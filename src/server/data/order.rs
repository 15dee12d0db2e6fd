//! Order data repository for database operations.
//!
//! Orders are stored in the `customer_order` table with their line items in `order_item`.
//! Every read returns the order together with its items.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::order::{NewOrder, Order, OrderScope, OrderStatus},
};

/// Repository providing database operations for orders and their items.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a priced order and its items in a single transaction.
    ///
    /// The order starts in `pending` status without a courier.
    ///
    /// # Arguments
    /// - `order` - Customer, partner, address, total, and priced items
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its items
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, order: NewOrder) -> Result<Order, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::customer_order::ActiveModel {
            customer_id: ActiveValue::Set(order.customer_id),
            partner_id: ActiveValue::Set(order.partner_id),
            courier_id: ActiveValue::Set(None),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            delivery_address: ActiveValue::Set(order.delivery_address),
            total_cents: ActiveValue::Set(order.total_cents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(order.items.len());
        for item in order.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(entity.id),
                product_id: ActiveValue::Set(item.product_id),
                quantity: ActiveValue::Set(item.quantity),
                unit_price_cents: ActiveValue::Set(item.unit_price_cents),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(item);
        }

        txn.commit().await?;

        Order::from_entity(entity, items)
    }

    /// Gets an order with its items.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that id
    /// - `Err(AppError)` - Database error or corrupt stored status
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(entity) = entity::prelude::CustomerOrder::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Order::from_entity(entity, items).map(Some)
    }

    /// Gets the orders visible in `scope` with pagination, newest first.
    ///
    /// # Arguments
    /// - `scope` - Restricts results to a customer, courier, partner owner, or nothing
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the page and total matching count
    /// - `Err(AppError)` - Database error or corrupt stored status
    pub async fn get_paginated(
        &self,
        scope: OrderScope,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Order>, u64), AppError> {
        let mut query = entity::prelude::CustomerOrder::find();

        query = match scope {
            OrderScope::All => query,
            OrderScope::Customer(user_id) => {
                query.filter(entity::customer_order::Column::CustomerId.eq(user_id))
            }
            OrderScope::Courier(user_id) => {
                query.filter(entity::customer_order::Column::CourierId.eq(user_id))
            }
            OrderScope::PartnerOwner(user_id) => query
                .join(
                    JoinType::InnerJoin,
                    entity::customer_order::Relation::Partner.def(),
                )
                .filter(entity::partner::Column::OwnerId.eq(user_id)),
        };

        let paginator = query
            .order_by_desc(entity::customer_order::Column::CreatedAt)
            .order_by_desc(entity::customer_order::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let order_ids: Vec<i32> = entities.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        if !order_ids.is_empty() {
            for item in entity::prelude::OrderItem::find()
                .filter(entity::order_item::Column::OrderId.is_in(order_ids))
                .order_by_asc(entity::order_item::Column::Id)
                .all(self.db)
                .await?
            {
                items_by_order.entry(item.order_id).or_default().push(item);
            }
        }

        let orders = entities
            .into_iter()
            .map(|entity| {
                let items = items_by_order.remove(&entity.id).unwrap_or_default();
                Order::from_entity(entity, items)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    /// Moves an order from `expected` to `next` and bumps `updated_at`.
    ///
    /// The write only applies while the stored status still equals `expected`, so two
    /// callers racing from the same status cannot both succeed. Does not validate the
    /// transition; that is the service's responsibility.
    ///
    /// # Arguments
    /// - `id` - Order to update
    /// - `expected` - Status the caller read before deciding on the change
    /// - `next` - Status to store
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order
    /// - `Ok(None)` - No order with that id is currently in `expected`
    /// - `Err(AppError)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let result = entity::prelude::CustomerOrder::update_many()
            .col_expr(
                entity::customer_order::Column::Status,
                Expr::value(next.as_str()),
            )
            .col_expr(
                entity::customer_order::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::customer_order::Column::Id.eq(id))
            .filter(entity::customer_order::Column::Status.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Assigns a courier to an unfinished order and bumps `updated_at`.
    ///
    /// Delivered and cancelled orders are left untouched even if they finished after
    /// the caller last read them.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order
    /// - `Ok(None)` - No unfinished order with that id
    /// - `Err(AppError)` - Database error during update
    pub async fn assign_courier(
        &self,
        id: i32,
        courier_id: &str,
    ) -> Result<Option<Order>, AppError> {
        let result = entity::prelude::CustomerOrder::update_many()
            .col_expr(
                entity::customer_order::Column::CourierId,
                Expr::value(courier_id),
            )
            .col_expr(
                entity::customer_order::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::customer_order::Column::Id.eq(id))
            .filter(entity::customer_order::Column::Status.is_not_in([
                OrderStatus::Delivered.as_str(),
                OrderStatus::Cancelled.as_str(),
            ]))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Checks whether any order line references a product.
    ///
    /// Products with order history cannot be deleted because line items keep a
    /// reference to them.
    pub async fn product_is_ordered(&self, product_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::ProductId.eq(product_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a partner has received any orders.
    pub async fn partner_has_orders(&self, partner_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::CustomerOrder::find()
            .filter(entity::customer_order::Column::PartnerId.eq(partner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

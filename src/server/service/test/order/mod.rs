use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        order::{CreateOrderItemParam, CreateOrderParam, OrderStatus},
        user::User,
    },
    service::order::OrderService,
};
use test_utils::{builder::TestBuilder, factory};

mod list_for_user;
mod update_status;

fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}

fn order_param(customer_id: &str, partner_id: i32, items: &[(i32, i32)]) -> CreateOrderParam {
    CreateOrderParam {
        customer_id: customer_id.to_string(),
        partner_id,
        delivery_address: "5 Main Street".to_string(),
        items: items
            .iter()
            .map(|&(product_id, quantity)| CreateOrderItemParam {
                product_id,
                quantity,
            })
            .collect(),
    }
}

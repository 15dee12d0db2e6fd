use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{NewOrder, OrderItem, OrderScope, OrderStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod assign_courier;
mod create;
mod find_by_id;
mod get_paginated;

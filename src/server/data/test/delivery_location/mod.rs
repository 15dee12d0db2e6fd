use crate::server::{
    data::delivery_location::DeliveryLocationRepository,
    model::delivery_location::RecordLocationParam,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod latest_for_order;
mod save;

use crate::server::{data::product::ProductRepository, model::product::ProductParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn param(name: &str, price_cents: i64, available: bool) -> ProductParam {
    ProductParam {
        name: name.to_string(),
        description: None,
        price_cents,
        available,
    }
}

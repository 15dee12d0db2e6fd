use crate::server::{
    error::AppError, model::product::ProductParam, service::product::ProductService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn param(name: &str, price_cents: i64, available: bool) -> ProductParam {
    ProductParam {
        name: name.to_string(),
        description: None,
        price_cents,
        available,
    }
}

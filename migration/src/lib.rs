pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_partner_table;
mod m20260105_000003_create_product_table;
mod m20260106_000004_create_customer_order_table;
mod m20260106_000005_create_order_item_table;
mod m20260107_000006_create_delivery_location_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_partner_table::Migration),
            Box::new(m20260105_000003_create_product_table::Migration),
            Box::new(m20260106_000004_create_customer_order_table::Migration),
            Box::new(m20260106_000005_create_order_item_table::Migration),
            Box::new(m20260107_000006_create_delivery_location_table::Migration),
        ]
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260106_000004_create_customer_order_table::CustomerOrder,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliveryLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(DeliveryLocation::Id))
                    .col(integer(DeliveryLocation::OrderId))
                    .col(string(DeliveryLocation::CourierId))
                    .col(double(DeliveryLocation::Latitude))
                    .col(double(DeliveryLocation::Longitude))
                    .col(
                        timestamp_with_time_zone(DeliveryLocation::RecordedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_location_order_id")
                            .from(DeliveryLocation::Table, DeliveryLocation::OrderId)
                            .to(CustomerOrder::Table, CustomerOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_location_courier_id")
                            .from(DeliveryLocation::Table, DeliveryLocation::CourierId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest-location lookups scan by order, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_delivery_location_order_recorded")
                    .table(DeliveryLocation::Table)
                    .col(DeliveryLocation::OrderId)
                    .col(DeliveryLocation::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliveryLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliveryLocation {
    Table,
    Id,
    OrderId,
    CourierId,
    Latitude,
    Longitude,
    RecordedAt,
}

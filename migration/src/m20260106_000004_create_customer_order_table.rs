use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_partner_table::Partner,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerOrder::Id))
                    .col(string(CustomerOrder::CustomerId))
                    .col(integer(CustomerOrder::PartnerId))
                    .col(string_null(CustomerOrder::CourierId))
                    .col(string(CustomerOrder::Status).default("pending"))
                    .col(string(CustomerOrder::DeliveryAddress))
                    .col(big_integer(CustomerOrder::TotalCents))
                    .col(
                        timestamp_with_time_zone(CustomerOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(CustomerOrder::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_order_customer_id")
                            .from(CustomerOrder::Table, CustomerOrder::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_order_partner_id")
                            .from(CustomerOrder::Table, CustomerOrder::PartnerId)
                            .to(Partner::Table, Partner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_order_courier_id")
                            .from(CustomerOrder::Table, CustomerOrder::CourierId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomerOrder {
    Table,
    Id,
    CustomerId,
    PartnerId,
    CourierId,
    Status,
    DeliveryAddress,
    TotalCents,
    CreatedAt,
    UpdatedAt,
}

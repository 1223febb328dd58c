//! Create occupancy_records table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_slots::Slots;
use super::m20240101_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OccupancyRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OccupancyRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OccupancyRecords::SlotId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OccupancyRecords::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OccupancyRecords::Plate).string().not_null())
                    .col(ColumnDef::new(OccupancyRecords::Model).string().not_null())
                    .col(
                        ColumnDef::new(OccupancyRecords::ArrivalAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OccupancyRecords::ExitAt)
                            .timestamp_with_time_zone(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_occupancy_records_slot")
                            .from(OccupancyRecords::Table, OccupancyRecords::SlotId)
                            .to(Slots::Table, Slots::SlotId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_occupancy_records_user")
                            .from(OccupancyRecords::Table, OccupancyRecords::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Open-record lookups filter on slot_id + exit_at IS NULL
        manager
            .create_index(
                Index::create()
                    .name("idx_occupancy_records_slot_exit")
                    .table(OccupancyRecords::Table)
                    .col(OccupancyRecords::SlotId)
                    .col(OccupancyRecords::ExitAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OccupancyRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OccupancyRecords {
    Table,
    Id,
    SlotId,
    UserId,
    Plate,
    Model,
    ArrivalAt,
    ExitAt,
}

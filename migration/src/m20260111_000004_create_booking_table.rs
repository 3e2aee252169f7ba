use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260110_000003_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::RoomId))
                    .col(integer(Booking::UserId))
                    .col(timestamp(Booking::CheckInDate))
                    .col(timestamp(Booking::CheckOutDate))
                    .col(integer(Booking::GuestCount))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Booking::IsDeleted).default(false))
                    .col(timestamp_null(Booking::DeletedAt))
                    .col(integer_null(Booking::DeletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the availability overlap query on (room, date range).
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_check_in")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::CheckInDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_room_check_in")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    RoomId,
    UserId,
    CheckInDate,
    CheckOutDate,
    GuestCount,
    CreatedAt,
    UpdatedAt,
    IsDeleted,
    DeletedAt,
    DeletedBy,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260110_000002_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HostId))
                    .col(integer(Room::LocationId))
                    .col(string(Room::Name))
                    .col(text_null(Room::Description))
                    .col(big_integer(Room::Price))
                    .col(integer(Room::GuestCount))
                    .col(integer(Room::BedroomCount))
                    .col(integer(Room::BedCount))
                    .col(integer(Room::BathroomCount))
                    .col(boolean(Room::IsDeleted).default(false))
                    .col(
                        timestamp(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_host_id")
                            .from(Room::Table, Room::HostId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_location_id")
                            .from(Room::Table, Room::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HostId,
    LocationId,
    Name,
    Description,
    Price,
    GuestCount,
    BedroomCount,
    BedCount,
    BathroomCount,
    IsDeleted,
    CreatedAt,
}

pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_location_table;
mod m20260110_000003_create_room_table;
mod m20260111_000004_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_location_table::Migration),
            Box::new(m20260110_000003_create_room_table::Migration),
            Box::new(m20260111_000004_create_booking_table::Migration),
        ]
    }
}

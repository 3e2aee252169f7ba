use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets a room by ID, including delisted rooms.
    ///
    /// Existing bookings must stay priceable and cancellable after their room
    /// is delisted, so this lookup skips the `is_deleted` filter.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The room
    /// - `Ok(None)`: No room with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.conn).await
    }

    /// Gets a room by ID, excluding delisted rooms
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The room
    /// - `Ok(None)`: No room with this ID, or it has been delisted
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::IsDeleted.eq(false))
            .one(self.conn)
            .await
    }
}

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets a user by ID, excluding deactivated accounts
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: No user with this ID, or the account is deactivated
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.conn)
            .await
    }
}

//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db, host.id, location.id)
///     .price(500_000)
///     .guest_count(2)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: i32,
    location_id: i32,
    name: String,
    description: Option<String>,
    price: i64,
    guest_count: i32,
    bedroom_count: i32,
    bed_count: i32,
    bathroom_count: i32,
    is_deleted: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"` where id is auto-incremented
    /// - description: `Some("Test room description")`
    /// - price: `1_000_000` per night
    /// - guest_count: `4`
    /// - bedroom_count / bed_count / bathroom_count: `1` / `2` / `1`
    /// - is_deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `host_id` - ID of the user hosting the room
    /// - `location_id` - ID of the location the room belongs to
    pub fn new(db: &'a DatabaseConnection, host_id: i32, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            host_id,
            location_id,
            name: format!("Room {}", id),
            description: Some("Test room description".to_string()),
            price: 1_000_000,
            guest_count: 4,
            bedroom_count: 1,
            bed_count: 2,
            bathroom_count: 1,
            is_deleted: false,
        }
    }

    /// Sets the room name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the per-night price.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the guest capacity.
    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Sets the soft-delete flag.
    pub fn is_deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            host_id: ActiveValue::Set(self.host_id),
            location_id: ActiveValue::Set(self.location_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            guest_count: ActiveValue::Set(self.guest_count),
            bedroom_count: ActiveValue::Set(self.bedroom_count),
            bed_count: ActiveValue::Set(self.bed_count),
            bathroom_count: ActiveValue::Set(self.bathroom_count),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values for the specified host and location.
pub async fn create_room(
    db: &DatabaseConnection,
    host_id: i32,
    location_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, host_id, location_id).build().await
}

//! Booking factory for creating test booking entities.
//!
//! The factory exposes `created_at` so tests can place a booking inside or
//! outside the post-creation grace period, and `check_in` so tests can
//! position a booking relative to the cancellation tiers.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use chrono::{Duration, Utc};
///
/// // A booking made an hour ago with check-in three hours away.
/// let booking = BookingFactory::new(&db, room.id, guest.id)
///     .created_at(Utc::now() - Duration::hours(1))
///     .check_in(Utc::now() + Duration::hours(3))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    check_in: DateTime<Utc>,
    check_out: Option<DateTime<Utc>>,
    guest_count: i32,
    created_at: DateTime<Utc>,
    is_deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
    deleted_by: Option<i32>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: 7 days from now
    /// - check_out: check_in + 3 days (unless overridden)
    /// - guest_count: `2`
    /// - created_at: now
    /// - is_deleted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room_id` - ID of the booked room
    /// - `user_id` - ID of the booking user
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        Self {
            db,
            room_id,
            user_id,
            check_in: Utc::now() + Duration::days(7),
            check_out: None,
            guest_count: 2,
            created_at: Utc::now(),
            is_deleted: false,
            deleted_at: None,
            deleted_by: None,
        }
    }

    /// Sets the check-in time.
    pub fn check_in(mut self, check_in: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self
    }

    /// Sets the check-out time.
    pub fn check_out(mut self, check_out: DateTime<Utc>) -> Self {
        self.check_out = Some(check_out);
        self
    }

    /// Sets the guest count.
    pub fn guest_count(mut self, guest_count: i32) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the booking as cancelled by the given user at the given time.
    pub fn cancelled(mut self, at: DateTime<Utc>, by: i32) -> Self {
        self.is_deleted = true;
        self.deleted_at = Some(at);
        self.deleted_by = Some(by);
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let check_out = self
            .check_out
            .unwrap_or_else(|| self.check_in + Duration::days(3));

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in_date: ActiveValue::Set(self.check_in),
            check_out_date: ActiveValue::Set(check_out),
            guest_count: ActiveValue::Set(self.guest_count),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            is_deleted: ActiveValue::Set(self.is_deleted),
            deleted_at: ActiveValue::Set(self.deleted_at),
            deleted_by: ActiveValue::Set(self.deleted_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the specified room and user.
///
/// Shorthand for `BookingFactory::new(db, room_id, user_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id, user_id).build().await
}

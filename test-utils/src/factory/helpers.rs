//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room together with its host user and location.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((host, location, room))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let host = crate::factory::user::create_user(db).await?;
    let location = crate::factory::location::create_location(db).await?;
    let room = crate::factory::room::create_room(db, host.id, location.id).await?;

    Ok((host, location, room))
}

/// Creates a booking together with its room, host, location and guest.
///
/// The guest is a separate user from the room's host.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((guest, room, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (_host, _location, room) = create_room_with_dependencies(db).await?;
    let guest = crate::factory::user::create_user(db).await?;
    let booking = crate::factory::booking::create_booking(db, room.id, guest.id).await?;

    Ok((guest, room, booking))
}

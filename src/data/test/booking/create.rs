use super::*;

/// Tests creating a booking with an explicit stay window.
///
/// Expected: Ok with the booking persisted as active
#[tokio::test]
async fn creates_active_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let check_in = Utc::now() + Duration::days(10);
    let check_out = check_in + Duration::days(4);

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(room.id, guest.id, check_in, check_out, 2)
        .await?;

    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.check_in_date, check_in);
    assert_eq!(booking.check_out_date, check_out);
    assert_eq!(booking.guest_count, 2);
    assert!(!booking.is_deleted);
    assert!(booking.deleted_at.is_none());
    assert!(booking.deleted_by.is_none());
    assert_eq!(booking.created_at, booking.updated_at);

    Ok(())
}

/// Tests looking up an active booking by ID.
///
/// Expected: Ok(Some) for the created booking, Ok(None) for an unknown ID
#[tokio::test]
async fn gets_active_booking_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_guest, _room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let found = repo.get_active_by_id(booking.id).await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));

    let missing = repo.get_active_by_id(booking.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that the owner-scoped lookup hides bookings of other users.
///
/// A booking owned by someone else must be indistinguishable from a missing
/// one.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn owner_scoped_lookup_hides_foreign_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = BookingRepository::new(db);

    let owned = repo.get_active_by_id_for_user(booking.id, guest.id).await?;
    assert_eq!(owned.map(|b| b.id), Some(booking.id));

    let foreign = repo.get_active_by_id_for_user(booking.id, other.id).await?;
    assert!(foreign.is_none());

    Ok(())
}

/// Tests fetching a booking together with its room.
///
/// Expected: Ok(Some((booking, Some(room))))
#[tokio::test]
async fn gets_booking_with_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_guest, room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let (found, found_room) = repo.get_active_with_room(booking.id).await?.unwrap();

    assert_eq!(found.id, booking.id);
    assert_eq!(found_room.map(|r| r.id), Some(room.id));

    Ok(())
}

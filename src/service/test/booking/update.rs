use super::*;
use crate::{
    model::booking::UpdateBookingDto,
    service::policy::PolicyError,
};
use test_utils::factory::booking::BookingFactory;

/// Tests moving the stay dates with enough notice before check-in.
///
/// Expected: Ok with new dates and pricing recomputed
#[tokio::test]
async fn moves_dates_with_sufficient_notice() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(Utc::now() - Duration::hours(3))
        .check_in(Utc::now() + Duration::days(3))
        .build()
        .await?;

    let new_check_in = Utc::now() + Duration::days(14);
    let updated = BookingService::new(db)
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: Some(new_check_in),
                check_out_date: Some(new_check_in + Duration::days(2)),
                guest_count: None,
            },
            caller(guest.id),
        )
        .await?;

    assert_eq!(updated.check_in_date, new_check_in);
    assert_eq!(updated.nights, 2);
    assert_eq!(updated.total_price, Some(2_000_000));

    Ok(())
}

/// Tests that a date change is denied once check-in is under 24 hours away.
///
/// Expected: Err(PolicyErr(NoticeWindowNotMet)) naming the date window
#[tokio::test]
async fn denies_date_change_inside_notice_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(Utc::now() - Duration::hours(3))
        .check_in(Utc::now() + Duration::hours(12))
        .build()
        .await?;

    let new_check_in = Utc::now() + Duration::days(14);
    let result = BookingService::new(db)
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: Some(new_check_in),
                check_out_date: Some(new_check_in + Duration::days(2)),
                guest_count: None,
            },
            caller(guest.id),
        )
        .await;

    match result {
        Err(AppError::PolicyErr(PolicyError::NoticeWindowNotMet {
            required_hours, ..
        })) => assert_eq!(required_hours, 24),
        other => panic!("Expected notice window error, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests category precedence: in the same 12-hours-out situation where a
/// date change is denied, a guest-count-only change is still allowed.
///
/// Expected: Ok with the new guest count
#[tokio::test]
async fn allows_guest_change_where_date_change_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(Utc::now() - Duration::hours(3))
        .check_in(Utc::now() + Duration::hours(12))
        .build()
        .await?;

    let updated = BookingService::new(db)
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: None,
                check_out_date: None,
                guest_count: Some(3),
            },
            caller(guest.id),
        )
        .await?;

    assert_eq!(updated.guest_count, 3);

    Ok(())
}

/// Tests that the grace period allows a date change even when check-in is
/// imminent.
///
/// Expected: Ok
#[tokio::test]
async fn grace_period_allows_any_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(Utc::now() - Duration::minutes(5))
        .check_in(Utc::now() + Duration::hours(2))
        .build()
        .await?;

    let new_check_in = Utc::now() + Duration::days(14);
    let updated = BookingService::new(db)
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: Some(new_check_in),
                check_out_date: Some(new_check_in + Duration::days(3)),
                guest_count: Some(4),
            },
            caller(guest.id),
        )
        .await?;

    assert_eq!(updated.check_in_date, new_check_in);
    assert_eq!(updated.guest_count, 4);

    Ok(())
}

/// Tests that updating someone else's booking reads as not found rather
/// than forbidden, so booking IDs cannot be probed.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn foreign_booking_reads_as_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_guest, _room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let result = BookingService::new(db)
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: None,
                check_out_date: None,
                guest_count: Some(1),
            },
            caller(intruder.id),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that moving onto another booking's window is rejected while the
/// booking's own current window never blocks its update.
///
/// Expected: Err(BadRequest) for the collision, Ok for the self-overlap
#[tokio::test]
async fn conflict_check_excludes_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let service = BookingService::new(db);

    let own_check_in = Utc::now() + Duration::days(10);
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(Utc::now() - Duration::hours(3))
        .check_in(own_check_in)
        .check_out(own_check_in + Duration::days(4))
        .build()
        .await?;

    let other_check_in = Utc::now() + Duration::days(30);
    BookingFactory::new(db, room.id, guest.id)
        .check_in(other_check_in)
        .check_out(other_check_in + Duration::days(4))
        .build()
        .await?;

    let collision = service
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: Some(other_check_in + Duration::days(1)),
                check_out_date: Some(other_check_in + Duration::days(3)),
                guest_count: None,
            },
            caller(guest.id),
        )
        .await;
    assert!(matches!(collision, Err(AppError::BadRequest(_))));

    let shrunk = service
        .update_booking(
            booking.id,
            UpdateBookingDto {
                check_in_date: Some(own_check_in + Duration::days(1)),
                check_out_date: Some(own_check_in + Duration::days(3)),
                guest_count: None,
            },
            caller(guest.id),
        )
        .await?;
    assert_eq!(shrunk.nights, 2);

    Ok(())
}

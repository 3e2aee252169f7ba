use super::*;
use crate::model::booking::CreateBookingDto;

/// Tests booking a room for a free window.
///
/// The default factory room costs 1,000,000 per night; a five-night stay
/// must total 5,000,000.
///
/// Expected: Ok with pricing computed from the room's current price
#[tokio::test]
async fn books_room_with_pricing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let check_in = Utc::now() + Duration::days(10);
    let booking = BookingService::new(db)
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(5),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await?;

    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.room_name.as_deref(), Some(room.name.as_str()));
    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.nights, 5);
    assert_eq!(booking.price_per_night, Some(1_000_000));
    assert_eq!(booking.total_price, Some(5_000_000));
    assert_eq!(booking.status, "active");

    Ok(())
}

/// Tests that check-out must come after check-in.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let check_in = Utc::now() + Duration::days(10);
    let result = BookingService::new(db)
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: check_in,
                check_out_date: check_in - Duration::days(1),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that check-in cannot fall before today, while today itself is
/// allowed.
///
/// Expected: Err(BadRequest) for yesterday, Ok for later today
#[tokio::test]
async fn rejects_past_check_in_but_allows_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let service = BookingService::new(db);

    let yesterday = Utc::now() - Duration::days(1);
    let result = service
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: yesterday,
                check_out_date: yesterday + Duration::days(3),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let today = Utc::now();
    let booked = service
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: today,
                check_out_date: today + Duration::days(3),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await?;
    assert_eq!(booked.nights, 3);

    Ok(())
}

/// Tests that the guest count is bounded by the room's capacity.
///
/// Expected: Err(BadRequest) naming the capacity
#[tokio::test]
async fn rejects_guest_count_over_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, location, _room) = factory::helpers::create_room_with_dependencies(db).await?;
    let small_room = factory::room::RoomFactory::new(db, host.id, location.id)
        .guest_count(2)
        .build()
        .await?;
    let guest = factory::user::create_user(db).await?;

    let check_in = Utc::now() + Duration::days(10);
    let result = BookingService::new(db)
        .book_room(
            CreateBookingDto {
                room_id: small_room.id,
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(3),
                guest_count: 3,
            },
            caller(guest.id),
        )
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("at most 2 guests")),
        other => panic!("Expected BadRequest, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests that booking an unknown or delisted room fails.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;

    let check_in = Utc::now() + Duration::days(10);
    let result = BookingService::new(db)
        .book_room(
            CreateBookingDto {
                room_id: 9999,
                check_in_date: check_in,
                check_out_date: check_in + Duration::days(3),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an overlapping window is rejected, including the same-day
/// turnover boundary where the new check-in equals an existing check-out.
///
/// Expected: Err(BadRequest) for both windows
#[tokio::test]
async fn rejects_overlapping_and_boundary_windows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;
    let service = BookingService::new(db);

    let check_in = Utc::now() + Duration::days(10);
    let check_out = check_in + Duration::days(4);
    service
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: check_in,
                check_out_date: check_out,
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await?;

    let overlapping = service
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: check_in + Duration::days(2),
                check_out_date: check_in + Duration::days(6),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await;
    match overlapping {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("already booked")),
        other => panic!("Expected BadRequest, got: {:?}", other.map(|_| ())),
    }

    let turnover = service
        .book_room(
            CreateBookingDto {
                room_id: room.id,
                check_in_date: check_out,
                check_out_date: check_out + Duration::days(2),
                guest_count: 2,
            },
            caller(guest.id),
        )
        .await;
    assert!(matches!(turnover, Err(AppError::BadRequest(_))));

    Ok(())
}

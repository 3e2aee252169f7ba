use super::*;
use test_utils::factory::booking::BookingFactory;

/// Tests that listing pages newest first with correct totals.
///
/// Three bookings with a page size of two give two pages, the newest two
/// rows on page one.
///
/// Expected: Ok with ordered rows and totals (3 items, 2 pages)
#[tokio::test]
async fn pages_newest_first_with_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let base = Utc::now() - Duration::days(1);
    let mut ids = Vec::new();
    for i in 0..3 {
        let booking = BookingFactory::new(db, room.id, guest.id)
            .check_in(Utc::now() + Duration::days(10 + 7 * i))
            .created_at(base + Duration::hours(i))
            .build()
            .await?;
        ids.push(booking.id);
    }

    let repo = BookingRepository::new(db);
    let page_one = repo.get_paginated(1, 2).await?;

    assert_eq!(page_one.total_items, 3);
    assert_eq!(page_one.total_pages, 2);
    assert_eq!(page_one.rows.len(), 2);
    assert_eq!(page_one.rows[0].0.id, ids[2]);
    assert_eq!(page_one.rows[1].0.id, ids[1]);

    let page_two = repo.get_paginated(2, 2).await?;
    assert_eq!(page_two.rows.len(), 1);
    assert_eq!(page_two.rows[0].0.id, ids[0]);

    Ok(())
}

/// Tests that rows carry their related room.
///
/// Expected: Ok with Some(room) on every row
#[tokio::test]
async fn rows_include_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_guest, room, _booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let page = repo.get_paginated(1, 10).await?;

    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].1.as_ref().map(|r| r.id), Some(room.id));

    Ok(())
}

/// Tests that cancelled bookings are excluded from listings.
///
/// Expected: Ok with only the active booking
#[tokio::test]
async fn excludes_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let active = BookingFactory::new(db, room.id, guest.id).build().await?;
    BookingFactory::new(db, room.id, guest.id)
        .check_in(Utc::now() + Duration::days(30))
        .cancelled(Utc::now(), guest.id)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let page = repo.get_paginated(1, 10).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.rows[0].0.id, active.id);

    Ok(())
}

/// Tests that the per-user listing only returns that user's bookings.
///
/// Expected: Ok with one row for each user
#[tokio::test]
async fn scopes_listing_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let alice_booking = BookingFactory::new(db, room.id, alice.id).build().await?;
    BookingFactory::new(db, room.id, bob.id)
        .check_in(Utc::now() + Duration::days(30))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let page = repo.get_paginated_by_user(alice.id, 1, 10).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.rows[0].0.id, alice_booking.id);
    assert_eq!(page.rows[0].0.user_id, alice.id);

    Ok(())
}

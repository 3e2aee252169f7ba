use super::*;
use test_utils::factory::booking::BookingFactory;

/// Tests updating a booking's stay window and guest count.
///
/// Expected: Ok with new values persisted and updated_at advanced
#[tokio::test]
async fn updates_window_and_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, _location, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let guest = factory::user::create_user(db).await?;

    let created_at = Utc::now() - Duration::hours(3);
    let booking = BookingFactory::new(db, room.id, guest.id)
        .created_at(created_at)
        .build()
        .await?;

    let new_check_in = Utc::now() + Duration::days(14);
    let new_check_out = new_check_in + Duration::days(2);

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_stay(booking, new_check_in, new_check_out, 3)
        .await?;

    assert_eq!(updated.check_in_date, new_check_in);
    assert_eq!(updated.check_out_date, new_check_out);
    assert_eq!(updated.guest_count, 3);
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at > created_at);

    let reloaded = repo.get_active_by_id(updated.id).await?.unwrap();
    assert_eq!(reloaded.check_in_date, new_check_in);
    assert_eq!(reloaded.guest_count, 3);

    Ok(())
}

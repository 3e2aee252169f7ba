use super::*;

/// Tests cancelling a booking via soft delete.
///
/// The row must survive with the actor and timestamp recorded, disappear
/// from active lookups, and stay reachable through the unfiltered lookup.
///
/// Expected: Ok with flags set; active lookup returns None
#[tokio::test]
async fn records_actor_and_hides_from_active_lookups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let booking_id = booking.id;

    let cancelled_at = Utc::now();
    let repo = BookingRepository::new(db);
    let cancelled = repo.soft_delete(booking, guest.id, cancelled_at).await?;

    assert!(cancelled.is_deleted);
    assert_eq!(cancelled.deleted_at, Some(cancelled_at));
    assert_eq!(cancelled.deleted_by, Some(guest.id));

    let active = repo.get_active_by_id(booking_id).await?;
    assert!(active.is_none());

    let unfiltered = repo.get_with_room(booking_id).await?;
    assert!(unfiltered.is_some());

    Ok(())
}

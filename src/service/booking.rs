//! Booking lifecycle: create, update, cancel, confirm, and listings.
//!
//! Every mutating flow validates before it writes, so a failed request never
//! leaves a partial mutation behind. Create and date-moving updates run their
//! availability check and write inside one transaction, closing the window in
//! which two requests for the same room could both see the range as free.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        booking::{BookingPage, BookingRepository},
        room::RoomRepository,
        user::UserRepository,
    },
    error::AppError,
    middleware::auth::Caller,
    model::{
        api::PaginationDto,
        booking::{
            BookingDto, BookingState, CancellationDto, ConfirmationDto, CreateBookingDto,
            PaginatedBookingsDto, PaginatedUserBookingsDto, UpdateBookingDto,
        },
        user::UserDto,
    },
    service::{policy, pricing},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for the caller
    ///
    /// Validates the stay window and guest count against the room, then runs
    /// the availability check and the insert inside one transaction.
    ///
    /// # Arguments
    /// - `dto`: Booking creation data
    /// - `caller`: The authenticated caller, who becomes the booking's owner
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The created booking with pricing
    /// - `Err(AppError)`: Validation failure, conflict, or database error
    pub async fn book_room(
        &self,
        dto: CreateBookingDto,
        caller: Caller,
    ) -> Result<BookingDto, AppError> {
        let now = Utc::now();

        if dto.check_out_date <= dto.check_in_date {
            return Err(AppError::BadRequest(
                "Check-out must be after check-in".to_string(),
            ));
        }
        if dto.check_in_date.date_naive() < now.date_naive() {
            return Err(AppError::BadRequest(
                "Check-in date cannot be in the past".to_string(),
            ));
        }
        if dto.guest_count < 1 {
            return Err(AppError::BadRequest(
                "At least one guest is required".to_string(),
            ));
        }

        let room = RoomRepository::new(self.db)
            .get_active_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if dto.guest_count > room.guest_count {
            return Err(AppError::BadRequest(format!(
                "Room '{}' accommodates at most {} guests",
                room.name, room.guest_count
            )));
        }

        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        if repo
            .has_conflict(room.id, dto.check_in_date, dto.check_out_date, None)
            .await?
        {
            return Err(AppError::BadRequest(
                "Room is already booked for the selected dates".to_string(),
            ));
        }

        let booking = repo
            .create(
                room.id,
                caller.id,
                dto.check_in_date,
                dto.check_out_date,
                dto.guest_count,
            )
            .await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            room_id = room.id,
            user_id = caller.id,
            "booking created"
        );

        Ok(BookingDto::from_entity(booking, Some(&room)))
    }

    /// Updates a booking's stay window or guest count
    ///
    /// Only the booking's owner can update it; a booking owned by someone
    /// else reads as not found. The grace period allows any change; outside
    /// it the change is classified and the matching notice window enforced
    /// against the booking's current check-in. When dates move, the
    /// availability check excludes the booking itself and runs in the same
    /// transaction as the write.
    ///
    /// # Arguments
    /// - `id`: Booking ID
    /// - `dto`: Fields to change; omitted fields keep their current values
    /// - `caller`: The authenticated caller
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The updated booking priced at the room's current
    ///   rate
    /// - `Err(AppError)`: Not found, policy violation, validation failure,
    ///   conflict, or database error
    pub async fn update_booking(
        &self,
        id: i32,
        dto: UpdateBookingDto,
        caller: Caller,
    ) -> Result<BookingDto, AppError> {
        let now = Utc::now();

        let booking = BookingRepository::new(self.db)
            .get_active_by_id_for_user(id, caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let check_in = dto.check_in_date.unwrap_or(booking.check_in_date);
        let check_out = dto.check_out_date.unwrap_or(booking.check_out_date);
        let guest_count = dto.guest_count.unwrap_or(booking.guest_count);

        let dates_changed =
            check_in != booking.check_in_date || check_out != booking.check_out_date;
        let guests_changed = guest_count != booking.guest_count;

        let category = policy::classify_change(dates_changed, guests_changed);
        policy::evaluate_update_permission(
            booking.created_at,
            booking.check_in_date,
            now,
            category,
        )?;

        if check_out <= check_in {
            return Err(AppError::BadRequest(
                "Check-out must be after check-in".to_string(),
            ));
        }
        if dates_changed && check_in.date_naive() < now.date_naive() {
            return Err(AppError::BadRequest(
                "Check-in date cannot be in the past".to_string(),
            ));
        }
        if guest_count < 1 {
            return Err(AppError::BadRequest(
                "At least one guest is required".to_string(),
            ));
        }

        let room = RoomRepository::new(self.db)
            .get_by_id(booking.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if guest_count > room.guest_count {
            return Err(AppError::BadRequest(format!(
                "Room '{}' accommodates at most {} guests",
                room.name, room.guest_count
            )));
        }

        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        if dates_changed
            && repo
                .has_conflict(room.id, check_in, check_out, Some(booking.id))
                .await?
        {
            return Err(AppError::BadRequest(
                "Room is already booked for the selected dates".to_string(),
            ));
        }

        let updated = repo
            .update_stay(booking, check_in, check_out, guest_count)
            .await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = updated.id,
            category = category.label(),
            "booking updated"
        );

        Ok(BookingDto::from_entity(updated, Some(&room)))
    }

    /// Cancels a booking, returning the refund breakdown
    ///
    /// Only the owner can cancel; a booking owned by someone else reads as
    /// not found. The refund tier comes from the hours remaining before
    /// check-in, except inside the grace period where the refund is always
    /// full. Too close to check-in, cancellation is refused and the booking
    /// stays untouched. Cancellation is a soft delete recording the actor
    /// and timestamp.
    ///
    /// # Arguments
    /// - `id`: Booking ID
    /// - `caller`: The authenticated caller
    ///
    /// # Returns
    /// - `Ok(CancellationDto)`: Refund tier, fraction, amount and totals
    /// - `Err(AppError)`: Not found, cancellation refused, or database error
    pub async fn cancel_booking(
        &self,
        id: i32,
        caller: Caller,
    ) -> Result<CancellationDto, AppError> {
        let now = Utc::now();
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_active_by_id_for_user(id, caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let policy =
            policy::evaluate_cancellation_policy(booking.created_at, booking.check_in_date, now)?;

        let room = RoomRepository::new(self.db)
            .get_by_id(booking.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let total_price =
            pricing::total_price(booking.check_in_date, booking.check_out_date, room.price);
        let refund_amount = pricing::refund_amount(total_price, policy.refund_fraction());

        let cancelled = repo.soft_delete(booking, caller.id, now).await?;

        tracing::info!(
            booking_id = cancelled.id,
            tier = policy.tier.label(),
            refund_amount,
            "booking cancelled"
        );

        Ok(CancellationDto {
            booking_id: cancelled.id,
            refund_tier: policy.tier.label().to_string(),
            refund_fraction: policy.refund_fraction(),
            refund_amount,
            total_price,
            hours_before_check_in: policy.hours_until_check_in.floor() as i64,
            cancelled_at: now,
        })
    }

    /// Confirms a booking on behalf of the room's host
    ///
    /// Allowed for the room's host or an admin; anyone else is rejected even
    /// though the booking is visible to them through other listings.
    /// Cancelled bookings cannot be confirmed. No durable confirmation flag
    /// is recorded; the response acknowledges the confirmation, naming the
    /// guest and the confirming actor.
    ///
    /// # Arguments
    /// - `id`: Booking ID
    /// - `caller`: The authenticated caller
    ///
    /// # Returns
    /// - `Ok(ConfirmationDto)`: Confirmation acknowledgement
    /// - `Err(AppError)`: Not found, forbidden, cancelled booking, or
    ///   database error
    pub async fn confirm_booking(
        &self,
        id: i32,
        caller: Caller,
    ) -> Result<ConfirmationDto, AppError> {
        let (booking, room) = BookingRepository::new(self.db)
            .get_with_room(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        let room = room.ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        if !caller.is_admin && room.host_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the room's host can confirm this booking".to_string(),
            ));
        }

        if BookingState::from_entity(&booking).is_cancelled() {
            return Err(AppError::BadRequest(
                "Cannot confirm a cancelled booking".to_string(),
            ));
        }

        let guest = UserRepository::new(self.db)
            .get_active_by_id(booking.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(booking_id = booking.id, host_id = caller.id, "booking confirmed");

        Ok(ConfirmationDto {
            booking_id: booking.id,
            room_name: room.name,
            guest_name: guest.full_name,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            confirmed_by: caller.id,
            confirmed_at: Utc::now(),
            message: "Booking confirmed".to_string(),
        })
    }

    /// Gets a page of all active bookings, newest first. Admin listing.
    ///
    /// # Returns
    /// - `Ok(PaginatedBookingsDto)`: Page of bookings with pricing
    /// - `Err(AppError)`: Database error
    pub async fn find_all_bookings(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookingsDto, AppError> {
        let result = BookingRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Self::to_paginated_dto(
            result,
            page,
            per_page,
            "No bookings found",
        ))
    }

    /// Gets a page of the caller's own active bookings, newest first
    ///
    /// # Returns
    /// - `Ok(PaginatedBookingsDto)`: Page of the caller's bookings
    /// - `Err(AppError)`: Database error
    pub async fn find_my_bookings(
        &self,
        page: u64,
        per_page: u64,
        caller: Caller,
    ) -> Result<PaginatedBookingsDto, AppError> {
        let result = BookingRepository::new(self.db)
            .get_paginated_by_user(caller.id, page, per_page)
            .await?;

        Ok(Self::to_paginated_dto(
            result,
            page,
            per_page,
            "You have no bookings yet",
        ))
    }

    /// Gets a page of a specific user's active bookings with the user's
    /// display info. The controller restricts this to admins and the user
    /// themselves.
    ///
    /// # Returns
    /// - `Ok(PaginatedUserBookingsDto)`: Page plus the target user
    /// - `Err(AppError)`: Unknown user or database error
    pub async fn find_bookings_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUserBookingsDto, AppError> {
        let user = UserRepository::new(self.db)
            .get_active_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let result = BookingRepository::new(self.db)
            .get_paginated_by_user(user_id, page, per_page)
            .await?;
        let listing = Self::to_paginated_dto(result, page, per_page, "No bookings found");

        Ok(PaginatedUserBookingsDto {
            user: UserDto::from_entity(user),
            items: listing.items,
            pagination: listing.pagination,
            message: listing.message,
        })
    }

    /// Gets a single active booking with pricing
    ///
    /// Visible to the booking's owner and admins; other users get a
    /// forbidden error since the booking exists in shared listings.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The booking with pricing
    /// - `Err(AppError)`: Not found, forbidden, or database error
    pub async fn find_booking_detail(
        &self,
        id: i32,
        caller: Caller,
    ) -> Result<BookingDto, AppError> {
        let (booking, room) = BookingRepository::new(self.db)
            .get_active_with_room(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !caller.is_admin && booking.user_id != caller.id {
            return Err(AppError::Forbidden(
                "You do not have access to this booking".to_string(),
            ));
        }

        Ok(BookingDto::from_entity(booking, room.as_ref()))
    }

    fn to_paginated_dto(
        result: BookingPage,
        page: u64,
        per_page: u64,
        empty_message: &str,
    ) -> PaginatedBookingsDto {
        let items: Vec<BookingDto> = result
            .rows
            .into_iter()
            .map(|(booking, room)| BookingDto::from_entity(booking, room.as_ref()))
            .collect();
        let message = items.is_empty().then(|| empty_message.to_string());

        PaginatedBookingsDto {
            items,
            pagination: PaginationDto::new(page, per_page, result.total_items, result.total_pages),
            message,
        }
    }
}

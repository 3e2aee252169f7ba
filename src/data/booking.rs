use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Page of booking rows with the totals needed for a pagination envelope.
pub struct BookingPage {
    /// Rows for the requested page, each with the booked room when it still
    /// exists.
    pub rows: Vec<(entity::booking::Model, Option<entity::room::Model>)>,
    pub total_items: u64,
    pub total_pages: u64,
}

pub struct BookingRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new booking
    ///
    /// # Arguments
    /// - `room_id`: ID of the booked room
    /// - `user_id`: ID of the booking user
    /// - `check_in`: Check-in timestamp
    /// - `check_out`: Check-out timestamp
    /// - `guest_count`: Number of guests
    ///
    /// # Returns
    /// - `Ok(Model)`: The created booking
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        room_id: i32,
        user_id: i32,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        guest_count: i32,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            check_in_date: ActiveValue::Set(check_in),
            check_out_date: ActiveValue::Set(check_out),
            guest_count: ActiveValue::Set(guest_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets a non-cancelled booking by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The booking
    /// - `Ok(None)`: No booking with this ID, or it has been cancelled
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .one(self.conn)
            .await
    }

    /// Gets a non-cancelled booking by ID, scoped to its owner.
    ///
    /// The owner filter is part of the query, so a booking owned by another
    /// user is indistinguishable from a missing one.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The booking, owned by `user_id`
    /// - `Ok(None)`: Missing, cancelled, or owned by someone else
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .one(self.conn)
            .await
    }

    /// Gets a booking by ID together with its room, regardless of state.
    ///
    /// Used where cancelled bookings must still be visible, such as the host
    /// confirmation flow rejecting a cancelled booking explicitly.
    ///
    /// # Returns
    /// - `Ok(Some((booking, room)))`: Booking and its room
    /// - `Ok(None)`: No booking with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_room(
        &self,
        id: i32,
    ) -> Result<Option<(entity::booking::Model, Option<entity::room::Model>)>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.conn)
            .await
    }

    /// Gets a non-cancelled booking by ID together with its room
    ///
    /// # Returns
    /// - `Ok(Some((booking, room)))`: Booking and its room (None if the room
    ///   row was removed)
    /// - `Ok(None)`: No active booking with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_active_with_room(
        &self,
        id: i32,
    ) -> Result<Option<(entity::booking::Model, Option<entity::room::Model>)>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .find_also_related(entity::prelude::Room)
            .one(self.conn)
            .await
    }

    /// Checks whether a stay window collides with an existing booking.
    ///
    /// Overlap is inclusive on both ends: a booking checking out the same day
    /// another checks in counts as a conflict. Cancelled bookings never
    /// conflict, and `exclude_id` lets an update ignore the booking being
    /// moved.
    ///
    /// # Returns
    /// - `Ok(true)`: At least one active booking of the room overlaps
    /// - `Ok(false)`: The window is free
    /// - `Err(DbErr)`: Database error
    pub async fn has_conflict(
        &self,
        room_id: i32,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .filter(entity::booking::Column::CheckInDate.lte(check_out))
            .filter(entity::booking::Column::CheckOutDate.gte(check_in));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::booking::Column::Id.ne(exclude_id));
        }

        let count = query.count(self.conn).await?;
        Ok(count > 0)
    }

    /// Updates a booking's stay window and guest count
    ///
    /// # Arguments
    /// - `booking`: Current booking row
    /// - `check_in` / `check_out`: New stay window
    /// - `guest_count`: New guest count
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated booking with a fresh `updated_at`
    /// - `Err(DbErr)`: Database error
    pub async fn update_stay(
        &self,
        booking: entity::booking::Model,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        guest_count: i32,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.check_in_date = ActiveValue::Set(check_in);
        active_model.check_out_date = ActiveValue::Set(check_out);
        active_model.guest_count = ActiveValue::Set(guest_count);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.conn).await
    }

    /// Cancels a booking by soft delete, recording who cancelled it and when.
    ///
    /// The row is kept; listings and conflict checks filter it out through
    /// `is_deleted`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The cancelled booking
    /// - `Err(DbErr)`: Database error
    pub async fn soft_delete(
        &self,
        booking: entity::booking::Model,
        deleted_by: i32,
        deleted_at: DateTime<Utc>,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.is_deleted = ActiveValue::Set(true);
        active_model.deleted_at = ActiveValue::Set(Some(deleted_at));
        active_model.deleted_by = ActiveValue::Set(Some(deleted_by));
        active_model.updated_at = ActiveValue::Set(deleted_at);

        active_model.update(self.conn).await
    }

    /// Gets a page of all active bookings, newest first
    ///
    /// # Arguments
    /// - `page`: Page number (1-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(BookingPage)`: Rows with rooms plus totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<BookingPage, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::booking::Column::CreatedAt);

        let paginator = query.paginate(self.conn, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(BookingPage {
            rows,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    /// Gets a page of a user's active bookings, newest first
    ///
    /// # Arguments
    /// - `user_id`: Owner of the bookings
    /// - `page`: Page number (1-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(BookingPage)`: Rows with rooms plus totals
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<BookingPage, DbErr> {
        let query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::booking::Column::CreatedAt);

        let paginator = query.paginate(self.conn, per_page);
        let totals = paginator.num_items_and_pages().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(BookingPage {
            rows,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }
}

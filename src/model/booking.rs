//! Booking DTOs and the internal lifecycle state model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::PaginationDto, user::UserDto};

/// Lifecycle state of a booking, derived from the soft-delete columns.
///
/// The table stores the flat `is_deleted` / `deleted_at` / `deleted_by`
/// columns; code that reasons about state goes through this variant so a
/// cancelled booking always carries its actor and timestamp together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    Active,
    Cancelled {
        at: DateTime<Utc>,
        by: i32,
    },
}

impl BookingState {
    pub fn from_entity(entity: &entity::booking::Model) -> Self {
        match (entity.is_deleted, entity.deleted_at, entity.deleted_by) {
            (true, Some(at), Some(by)) => Self::Cancelled { at, by },
            _ => Self::Active,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Wire label for the state.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

/// Request body for creating a booking.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub guest_count: i32,
}

/// Request body for updating a booking. Omitted fields keep their current
/// values.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    pub check_in_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub guest_count: Option<i32>,
}

/// A booking as returned by create, update, detail and list endpoints,
/// enriched with nightly pricing and the room summary.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    pub room_name: Option<String>,
    pub user_id: i32,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub guest_count: i32,
    pub nights: i64,
    pub price_per_night: Option<i64>,
    pub total_price: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingDto {
    /// Builds the response DTO from a booking row and its room.
    ///
    /// Pricing uses the room's current per-night price; when the room row is
    /// gone the pricing fields are omitted rather than guessed.
    pub fn from_entity(
        booking: entity::booking::Model,
        room: Option<&entity::room::Model>,
    ) -> Self {
        let pricing = room.map(|room| {
            crate::service::pricing::price_stay(
                booking.check_in_date,
                booking.check_out_date,
                room.price,
            )
        });
        let nights = pricing.map(|p| p.nights).unwrap_or_else(|| {
            crate::service::pricing::nights_between(booking.check_in_date, booking.check_out_date)
        });
        let state = BookingState::from_entity(&booking);

        Self {
            id: booking.id,
            room_id: booking.room_id,
            room_name: room.map(|room| room.name.clone()),
            user_id: booking.user_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            guest_count: booking.guest_count,
            nights,
            price_per_night: pricing.map(|p| p.price_per_night),
            total_price: pricing.map(|p| p.total_price),
            status: state.label().to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Paginated list of bookings. `message` appears only when the page is empty.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBookingsDto {
    pub items: Vec<BookingDto>,
    pub pagination: PaginationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Paginated list of one user's bookings, with the user's display info.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUserBookingsDto {
    pub user: UserDto,
    pub items: Vec<BookingDto>,
    pub pagination: PaginationDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a successful cancellation.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancellationDto {
    pub booking_id: i32,
    /// "grace", "free", "partial" or "minimal".
    pub refund_tier: String,
    pub refund_fraction: f64,
    pub refund_amount: i64,
    pub total_price: i64,
    /// Whole hours between cancellation and check-in, floored.
    pub hours_before_check_in: i64,
    pub cancelled_at: DateTime<Utc>,
}

/// Acknowledgement returned by the confirm endpoint, naming the guest and
/// the confirming host or admin.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDto {
    pub booking_id: i32,
    pub room_name: String,
    pub guest_name: String,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub confirmed_by: i32,
    pub confirmed_at: DateTime<Utc>,
    pub message: String,
}

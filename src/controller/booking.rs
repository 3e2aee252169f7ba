use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::{ErrorDto, PageQuery},
        booking::{
            BookingDto, CancellationDto, ConfirmationDto, CreateBookingDto,
            PaginatedBookingsDto, PaginatedUserBookingsDto, UpdateBookingDto,
        },
    },
    service::booking::BookingService,
    state::AppState,
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data or dates unavailable", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .book_room(payload, caller)
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of all bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (page, page_size) = query.resolve();
    let listing = BookingService::new(&state.db)
        .find_all_bookings(page, page_size)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/my-bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of the caller's bookings", body = PaginatedBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (page, page_size) = query.resolve();
    let listing = BookingService::new(&state.db)
        .find_my_bookings(page, page_size, caller)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/by-user/{user_id}",
    tag = BOOKING_TAG,
    params(
        ("user_id" = i32, Path, description = "User whose bookings to list"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of the user's bookings", body = PaginatedUserBookingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may only list their own bookings", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_by_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !caller.is_admin && caller.id != user_id {
        return Err(AppError::Forbidden(
            "You may only list your own bookings".to_string(),
        ));
    }

    let (page, page_size) = query.resolve();
    let listing = BookingService::new(&state.db)
        .find_bookings_by_user(user_id, page, page_size)
        .await?;

    Ok((StatusCode::OK, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking with pricing", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller does not own this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .find_booking_detail(id, caller)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Successfully updated booking", body = BookingDto),
        (status = 400, description = "Invalid data, dates unavailable, or notice window closed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db)
        .update_booking(id, payload, caller)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled with refund breakdown", body = CancellationDto),
        (status = 400, description = "Cancellation refused this close to check-in", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cancellation = BookingService::new(&state.db)
        .cancel_booking(id, caller)
        .await?;

    Ok((StatusCode::OK, Json(cancellation)))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/confirm/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = ConfirmationDto),
        (status = 400, description = "Booking is cancelled", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the room's host", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let confirmation = BookingService::new(&state.db)
        .confirm_booking(id, caller)
        .await?;

    Ok((StatusCode::OK, Json(confirmation)))
}

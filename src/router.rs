use axum::{
    routing::{get, patch, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, booking},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::get_user,
        auth::logout,
        booking::create_booking,
        booking::get_all_bookings,
        booking::get_my_bookings,
        booking::get_bookings_by_user,
        booking::get_booking,
        booking::update_booking,
        booking::cancel_booking,
        booking::confirm_booking,
    ),
    tags(
        (name = "auth", description = "Session introspection and logout"),
        (name = "booking", description = "Booking lifecycle endpoints")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/logout", get(auth::logout))
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::get_all_bookings),
        )
        .route("/api/bookings/my-bookings", get(booking::get_my_bookings))
        .route(
            "/api/bookings/by-user/{user_id}",
            get(booking::get_bookings_by_user),
        )
        .route(
            "/api/bookings/confirm/{id}",
            patch(booking::confirm_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking)
                .patch(booking::update_booking)
                .delete(booking::cancel_booking),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

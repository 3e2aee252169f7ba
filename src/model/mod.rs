//! Wire DTOs and domain models.
//!
//! DTOs carry camelCase field names on the wire and derive `ToSchema` so the
//! OpenAPI document stays in sync with what the handlers actually serialize.

pub mod api;
pub mod booking;
pub mod user;

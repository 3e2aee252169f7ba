//! HTTP request handlers.
//!
//! Controllers resolve the caller through the auth guard, convert between
//! wire DTOs and service calls, and map results to status codes. Access
//! control that depends only on the caller lives here; access control that
//! depends on the data (ownership, room host) lives in the service.

pub mod auth;
pub mod booking;

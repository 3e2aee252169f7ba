//! SeaORM entity models for the roomstay database schema.

pub mod prelude;

pub mod booking;
pub mod location;
pub mod room;
pub mod user;

//! Entity factories for creating test data with sensible defaults.
//!
//! Each factory provides a builder pattern for creating one entity type,
//! with defaults that can be overridden per test scenario. The `helpers`
//! module offers shortcuts that create an entity together with all of its
//! dependencies.

pub mod booking;
pub mod helpers;
pub mod location;
pub mod room;
pub mod user;

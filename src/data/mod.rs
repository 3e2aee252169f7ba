//! Database repository layer for all domain entities.
//!
//! Repositories are thin structs holding a connection reference and are
//! generic over [`sea_orm::ConnectionTrait`], so the same repository code runs
//! against the pooled connection for plain reads and against an open
//! transaction when a service needs a check-then-write sequence to be atomic.

pub mod booking;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;

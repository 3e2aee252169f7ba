//! Business logic layer.
//!
//! Services orchestrate validation, the time policy engine, and repository
//! calls. The policy and pricing modules are pure; `booking` owns the
//! transactional flows.

pub mod booking;
pub mod policy;
pub mod pricing;

//! Roomstay: a short-term rental booking backend.
//!
//! Users book rooms for contiguous date ranges, hosts confirm bookings, and
//! guests may update or cancel subject to a time policy with tiered refunds.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Booking lifecycle, time policy engine, and pricing
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Wire DTOs and domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the auth guard
//!
//! Supporting modules provide application infrastructure: `config`, `state`,
//! `startup`, and `router`.
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** resolves the session into an authenticated caller
//! 3. **Controller** validates access and calls the service
//! 4. **Service** runs validation, the time policy, and repository calls
//! 5. **Data** executes the queries and returns entity models
//! 6. **Controller** serializes the result DTO into the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

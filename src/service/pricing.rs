//! Nightly pricing for bookings.
//!
//! Stay length is charged in whole nights: any partial day between check-in
//! and check-out rounds up. Totals are computed from the room's current
//! per-night price at evaluation time.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Number of billable nights between check-in and check-out.
///
/// Rounds any partial day up, so a stay of 2 days and 1 hour bills 3 nights.
/// Callers must validate that check-out is after check-in first.
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let millis = (check_out - check_in).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Total price for a stay at the given per-night price.
pub fn total_price(check_in: DateTime<Utc>, check_out: DateTime<Utc>, price_per_night: i64) -> i64 {
    nights_between(check_in, check_out) * price_per_night
}

/// Pricing breakdown for a stay, attached to booking responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPricing {
    pub nights: i64,
    pub price_per_night: i64,
    pub total_price: i64,
}

/// Prices a stay against the room's current per-night price.
pub fn price_stay(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    price_per_night: i64,
) -> StayPricing {
    let nights = nights_between(check_in, check_out);
    StayPricing {
        nights,
        price_per_night,
        total_price: nights * price_per_night,
    }
}

/// Refund amount for the given total and refund fraction, rounded to the
/// nearest whole unit.
pub fn refund_amount(total_price: i64, fraction: f64) -> i64 {
    (total_price as f64 * fraction).round() as i64
}

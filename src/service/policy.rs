//! Time policy engine for booking modifications and cancellations.
//!
//! All rules are pure functions of timestamps so they can be evaluated and
//! tested without a database. Two families of rules live here:
//!
//! - Notice windows: how far before check-in a booking may still be modified,
//!   depending on what kind of change is requested.
//! - Refund tiers: how much of the total price is refunded on cancellation,
//!   depending on how far away check-in is.
//!
//! A short grace period after creation overrides both families: within it any
//! modification is allowed and cancellation refunds in full.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Minutes after creation during which a booking can be freely modified or
/// cancelled with a full refund. The boundary is inclusive.
pub const GRACE_PERIOD_MINUTES: i64 = 10;

/// Hours before check-in above which cancellation refunds in full.
pub const FREE_CANCELLATION_HOURS: i64 = 48;
/// Hours before check-in above which cancellation refunds half.
pub const PARTIAL_REFUND_HOURS: i64 = 24;
/// Hours before check-in above which cancellation refunds a quarter.
/// Below this floor cancellation is refused outright.
pub const MINIMAL_REFUND_HOURS: i64 = 6;

/// Notice required to change the stay dates of a booking.
pub const DATE_CHANGE_NOTICE_HOURS: i64 = 24;
/// Notice required to change the guest count of a booking.
pub const GUEST_CHANGE_NOTICE_HOURS: i64 = 6;
/// Notice required for changes that touch neither dates nor guests.
pub const MINOR_CHANGE_NOTICE_HOURS: i64 = 2;
/// Notice applied to change kinds outside the named categories. Every current
/// category maps explicitly, so this only matters if a new kind is added.
pub const DEFAULT_CHANGE_NOTICE_HOURS: i64 = 12;

/// What kind of change an update request represents, ordered by strictness.
///
/// Date changes dominate guest changes, which dominate minor changes. A
/// request that moves the dates AND the guest count is a date change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Dates,
    Guests,
    Minor,
}

impl ChangeCategory {
    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dates => "date change",
            Self::Guests => "guest count change",
            Self::Minor => "minor change",
        }
    }
}

/// Refund tier applied to a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundTier {
    /// Cancelled within the post-creation grace period.
    Grace,
    /// At least [`FREE_CANCELLATION_HOURS`] before check-in.
    Free,
    /// At least [`PARTIAL_REFUND_HOURS`] before check-in.
    Partial,
    /// At least [`MINIMAL_REFUND_HOURS`] before check-in.
    Minimal,
}

impl RefundTier {
    /// Fraction of the total price refunded for this tier.
    pub fn refund_fraction(&self) -> f64 {
        match self {
            Self::Grace | Self::Free => 1.0,
            Self::Partial => 0.5,
            Self::Minimal => 0.25,
        }
    }

    /// Label used in the cancellation response.
    ///
    /// Grace refunds at the free rate but reports its own label, so a caller
    /// can tell a grace-period cancellation apart from an early one.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grace => "grace",
            Self::Free => "free",
            Self::Partial => "partial",
            Self::Minimal => "minimal",
        }
    }
}

/// Outcome of a successful cancellation policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CancellationPolicy {
    pub tier: RefundTier,
    /// Hours between now and check-in, fractional.
    pub hours_until_check_in: f64,
}

impl CancellationPolicy {
    pub fn refund_fraction(&self) -> f64 {
        self.tier.refund_fraction()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PolicyError {
    /// The requested change requires more notice than remains before check-in.
    #[error(
        "A {category} requires at least {required_hours} hours notice before check-in, \
         but only {remaining_hours:.1} hours remain"
    )]
    NoticeWindowNotMet {
        category: &'static str,
        required_hours: i64,
        remaining_hours: f64,
    },

    /// Cancellation was requested too close to check-in.
    #[error(
        "Bookings cannot be cancelled less than {MINIMAL_REFUND_HOURS} hours before \
         check-in ({remaining_hours:.1} hours remain); please contact the host directly"
    )]
    CancellationRefused { remaining_hours: f64 },
}

/// Classifies an update request into its strictest applicable category.
pub fn classify_change(dates_changed: bool, guests_changed: bool) -> ChangeCategory {
    if dates_changed {
        ChangeCategory::Dates
    } else if guests_changed {
        ChangeCategory::Guests
    } else {
        ChangeCategory::Minor
    }
}

/// Notice hours required before check-in for the given change category.
pub fn required_notice_hours(category: ChangeCategory) -> i64 {
    match category {
        ChangeCategory::Dates => DATE_CHANGE_NOTICE_HOURS,
        ChangeCategory::Guests => GUEST_CHANGE_NOTICE_HOURS,
        ChangeCategory::Minor => MINOR_CHANGE_NOTICE_HOURS,
    }
}

/// Whether `now` falls within the post-creation grace period, inclusive.
pub fn is_within_grace_period(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let elapsed = now - created_at;
    elapsed.num_seconds() <= GRACE_PERIOD_MINUTES * 60
}

/// Fractional hours between `now` and `check_in`. Negative once check-in has
/// passed.
fn hours_until(check_in: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (check_in - now).num_seconds() as f64 / 3600.0
}

/// Decides whether a booking may be modified.
///
/// Within the grace period any change is allowed. Outside it, the change
/// category's notice window must still be open: the remaining hours before
/// check-in must be at least the required notice, with the boundary counting
/// as allowed.
pub fn evaluate_update_permission(
    created_at: DateTime<Utc>,
    check_in: DateTime<Utc>,
    now: DateTime<Utc>,
    category: ChangeCategory,
) -> Result<(), PolicyError> {
    if is_within_grace_period(created_at, now) {
        return Ok(());
    }

    let remaining = hours_until(check_in, now);
    let required = required_notice_hours(category);
    if remaining >= required as f64 {
        Ok(())
    } else {
        Err(PolicyError::NoticeWindowNotMet {
            category: category.label(),
            required_hours: required,
            remaining_hours: remaining,
        })
    }
}

/// Decides whether a booking may be cancelled and at which refund tier.
///
/// Within the grace period cancellation always succeeds with a full refund,
/// even when check-in is closer than the minimal-refund floor. Outside it the
/// tier is picked from the hours remaining before check-in; below
/// [`MINIMAL_REFUND_HOURS`] cancellation is refused.
pub fn evaluate_cancellation_policy(
    created_at: DateTime<Utc>,
    check_in: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<CancellationPolicy, PolicyError> {
    let remaining = hours_until(check_in, now);

    if is_within_grace_period(created_at, now) {
        return Ok(CancellationPolicy {
            tier: RefundTier::Grace,
            hours_until_check_in: remaining,
        });
    }

    let tier = if remaining >= FREE_CANCELLATION_HOURS as f64 {
        RefundTier::Free
    } else if remaining >= PARTIAL_REFUND_HOURS as f64 {
        RefundTier::Partial
    } else if remaining >= MINIMAL_REFUND_HOURS as f64 {
        RefundTier::Minimal
    } else {
        return Err(PolicyError::CancellationRefused {
            remaining_hours: remaining,
        });
    };

    Ok(CancellationPolicy {
        tier,
        hours_until_check_in: remaining,
    })
}

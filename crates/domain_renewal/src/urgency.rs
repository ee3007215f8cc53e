//! Urgency classification for policy end dates
//!
//! Days remaining and the tier derived from it. Classification is stateless
//! and recomputed on every call, so a tier can never go stale while a record
//! sits in memory.

use chrono::{Local, NaiveDate};
use core_kernel::{Customer, Policy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a policy needs renewal attention
///
/// Ordered from most to least severe. The bands are contiguous, lower bound
/// exclusive and upper bound inclusive, so every whole-day count lands in
/// exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// Cover has ended; the end date is today or already past
    Lapsed,
    /// Ten days or fewer of cover left
    Critical,
    /// Between eleven and twenty days left
    Warning,
    /// Between twenty-one and thirty days left
    Upcoming,
    /// More than thirty days left
    Healthy,
}

impl UrgencyTier {
    /// Classifies a signed days-remaining count
    pub fn from_days_remaining(days: i64) -> Self {
        match days {
            d if d <= 0 => UrgencyTier::Lapsed,
            d if d <= 10 => UrgencyTier::Critical,
            d if d <= 20 => UrgencyTier::Warning,
            d if d <= 30 => UrgencyTier::Upcoming,
            _ => UrgencyTier::Healthy,
        }
    }

    /// Returns the display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyTier::Lapsed => "lapsed",
            UrgencyTier::Critical => "critical",
            UrgencyTier::Warning => "warning",
            UrgencyTier::Upcoming => "upcoming",
            UrgencyTier::Healthy => "healthy",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed whole days from `today` until `end_date`
///
/// Negative means the cover ended that many days ago, zero means it ends
/// today, positive means days still to run. Calendar dates carry no time
/// component, so the difference is exact.
pub fn days_remaining_from(today: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

/// Signed whole days from the local calendar date until `end_date`
pub fn days_remaining(end_date: NaiveDate) -> i64 {
    days_remaining_from(Local::now().date_naive(), end_date)
}

/// Orders customer-and-policy pairs most urgent first
///
/// Ascending by days remaining as of `today`. The sort is stable, so pairs
/// with equal end dates keep their input order.
pub fn sort_by_urgency(pairs: &mut [(&Customer, &Policy)], today: NaiveDate) {
    pairs.sort_by_key(|(_, policy)| days_remaining_from(today, policy.end_date));
}

//! Portfolio summary counters
//!
//! Display counters computed over a renewal schedule. The week and urgent
//! bands are sub-filters of the tier table, not tiers of their own, which is
//! why they live here and not in the classifier.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::schedule::RenewalEntry;
use crate::urgency::UrgencyTier;

/// Dashboard counters for one customer listing
///
/// `urgent` and `ending_this_week` both include day zero, even though the
/// tier table classifies day zero as lapsed. `premium_total` sums the
/// recorded amounts; blank, absent, and unparseable values count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub ending_this_week: usize,
    pub urgent: usize,
    pub warning: usize,
    pub upcoming: usize,
    pub customers: usize,
    pub premium_total: Decimal,
}

impl PortfolioSummary {
    /// Computes the counters for a schedule drawn from `customer_count` customers
    pub fn from_schedule(entries: &[RenewalEntry], customer_count: usize) -> Self {
        let mut summary = Self {
            ending_this_week: 0,
            urgent: 0,
            warning: 0,
            upcoming: 0,
            customers: customer_count,
            premium_total: Decimal::ZERO,
        };

        for entry in entries {
            let days = entry.days_remaining;
            if (0..=7).contains(&days) {
                summary.ending_this_week += 1;
            }
            if (0..=10).contains(&days) {
                summary.urgent += 1;
            }
            if entry.tier == UrgencyTier::Warning {
                summary.warning += 1;
            }
            if entry.tier == UrgencyTier::Upcoming {
                summary.upcoming += 1;
            }
            summary.premium_total += amount_or_zero(entry.policy.amount.as_deref());
        }

        summary
    }
}

/// Premium amount as recorded; blank, absent, and unparseable all read as zero
fn amount_or_zero(amount: Option<&str>) -> Decimal {
    amount
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .and_then(|a| a.parse().ok())
        .unwrap_or(Decimal::ZERO)
}

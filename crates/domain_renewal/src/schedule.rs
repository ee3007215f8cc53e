//! The renewal schedule
//!
//! Flattens every customer's policy set into one reminder-ready sequence,
//! most urgent first. Each row carries everything a reminder surface needs,
//! so consumers never re-derive days or tiers themselves.

use chrono::NaiveDate;
use core_kernel::{Customer, CustomerId, Policy};
use serde::Serialize;
use tracing::debug;

use crate::reminder;
use crate::urgency::{self, UrgencyTier};

/// One reminder-ready row of the renewal schedule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalEntry {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub mobile: String,
    pub policy: Policy,
    pub days_remaining: i64,
    pub tier: UrgencyTier,
    pub message: String,
    pub link: String,
}

/// Builds the renewal schedule for a customer listing as of `today`
///
/// Every policy of every customer becomes one entry. Ordering is most
/// urgent first; policies ending on the same day keep the listing's order.
pub fn build_schedule(customers: &[Customer], today: NaiveDate) -> Vec<RenewalEntry> {
    let mut pairs: Vec<(&Customer, &Policy)> = customers
        .iter()
        .flat_map(|customer| customer.policies.iter().map(move |policy| (customer, policy)))
        .collect();
    urgency::sort_by_urgency(&mut pairs, today);

    let entries: Vec<RenewalEntry> = pairs
        .into_iter()
        .map(|(customer, policy)| {
            let days = urgency::days_remaining_from(today, policy.end_date);
            let message = reminder::renewal_message_by_days(customer, policy, days);
            let link = reminder::renewal_link(customer, &message).to_string();
            RenewalEntry {
                customer_id: customer.id.clone(),
                customer_name: customer.name.clone(),
                mobile: customer.mobile.clone(),
                policy: policy.clone(),
                days_remaining: days,
                tier: UrgencyTier::from_days_remaining(days),
                message,
                link,
            }
        })
        .collect();

    debug!(entries = entries.len(), "built renewal schedule");
    entries
}

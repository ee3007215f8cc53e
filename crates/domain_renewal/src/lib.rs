//! Renewal Domain
//!
//! This crate implements everything the reminder surfaces consume: days-remaining
//! arithmetic, the urgency tier table, reminder message and deep-link
//! construction, and the flattened renewal schedule with its dashboard counters.
//!
//! # Key Concepts
//!
//! - **Days remaining**: signed whole days from today until a policy's end date
//! - **Urgency tier**: the five-band classification of a days-remaining count
//! - **Renewal entry**: one customer-and-policy pair, reminder-ready
//! - **Portfolio summary**: display counters computed over a schedule

pub mod urgency;
pub mod reminder;
pub mod schedule;
pub mod summary;

pub use urgency::{days_remaining, days_remaining_from, sort_by_urgency, UrgencyTier};
pub use reminder::{
    check_in_message, renewal_link, renewal_message_by_date, renewal_message_by_days,
};
pub use schedule::{build_schedule, RenewalEntry};
pub use summary::PortfolioSummary;

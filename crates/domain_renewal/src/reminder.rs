//! Renewal reminder messages and deep links
//!
//! The message templates are fixed; everything user-visible in them comes
//! straight from the record. Links target the wa.me chat endpoint with the
//! message carried in the `text` query parameter.

use core_kernel::{Customer, Policy};
use url::Url;

/// Chat endpoint the reminder links open
const CHAT_BASE_URL: &str = "https://wa.me/";

/// Reminder naming the policy's end date
///
/// Dates render in `YYYY-MM-DD` form.
pub fn renewal_message_by_date(customer: &Customer, policy: &Policy) -> String {
    format!(
        "Hi {}, your {} insurance policy is ending on {}. Click here to renew and stay protected.",
        customer.name, policy.policy_type, policy.end_date
    )
}

/// Reminder naming the days left, used on schedule rows
///
/// Callers pass the days-remaining count they already computed so the row
/// and its message can never disagree.
pub fn renewal_message_by_days(customer: &Customer, policy: &Policy, days_remaining: i64) -> String {
    format!(
        "Hello {}, your {} insurance policy is expiring in {} days. Renew now?",
        customer.name, policy.policy_type, days_remaining
    )
}

/// Date-free check-in message for ad-hoc follow-ups
pub fn check_in_message(customer: &Customer) -> String {
    format!(
        "Hi {}, checking in regarding your policy protocol status.",
        customer.name
    )
}

/// Builds the chat deep link carrying a reminder message
///
/// The phone segment keeps digits only; separators, spaces, and a leading
/// `+` are stripped. A mobile with no digits at all yields a link with an
/// empty phone segment, which the chat service rejects on open. That
/// matches how these links have always behaved, so it is not guarded here.
pub fn renewal_link(customer: &Customer, message: &str) -> Url {
    let digits: String = customer
        .mobile
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let mut link = Url::parse(CHAT_BASE_URL).expect("static chat base url parses");
    link.set_path(&digits);
    link.query_pairs_mut().append_pair("text", message);
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CustomerId, InsuranceType};

    fn customer(mobile: &str) -> Customer {
        Customer {
            id: CustomerId::new("CUST-101"),
            name: "Sarah Connor".to_string(),
            dob: "1984-05-12".to_string(),
            mobile: mobile.to_string(),
            email: "sarah.c@sky.net".to_string(),
            address: "123 Resistance Way, LA".to_string(),
            pan: "ABCDE1234F".to_string(),
            smk: "Level 5".to_string(),
            policies: Vec::new(),
        }
    }

    fn policy() -> Policy {
        Policy {
            id: "p1".to_string(),
            policy_type: InsuranceType::Health,
            policy_id: "HLTH-990".to_string(),
            company_name: "Cyberdyne Care".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 23).unwrap(),
            amount: Some("15000".to_string()),
        }
    }

    #[test]
    fn test_message_by_date_names_customer_type_and_date() {
        let message = renewal_message_by_date(&customer("555-0199"), &policy());
        assert_eq!(
            message,
            "Hi Sarah Connor, your Health insurance policy is ending on 2024-06-23. \
             Click here to renew and stay protected."
        );
    }

    #[test]
    fn test_message_by_days_names_the_count() {
        let message = renewal_message_by_days(&customer("555-0199"), &policy(), 8);
        assert_eq!(
            message,
            "Hello Sarah Connor, your Health insurance policy is expiring in 8 days. Renew now?"
        );
    }

    #[test]
    fn test_check_in_message_is_date_free() {
        let message = check_in_message(&customer("555-0199"));
        assert_eq!(
            message,
            "Hi Sarah Connor, checking in regarding your policy protocol status."
        );
    }

    #[test]
    fn test_link_strips_non_digits_from_phone() {
        let link = renewal_link(&customer("+1 (555) 019-9"), "Renew now");
        assert_eq!(link.host_str(), Some("wa.me"));
        assert_eq!(link.path(), "/15550199");
    }

    #[test]
    fn test_link_message_survives_the_query_encoding() {
        let message = renewal_message_by_date(&customer("555-0199"), &policy());
        let link = renewal_link(&customer("555-0199"), &message);

        let (key, value) = link.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(value, message);
        assert!(!link.as_str().contains(' '), "query must be encoded");
    }

    #[test]
    fn test_link_with_digit_free_phone_keeps_empty_segment() {
        let link = renewal_link(&customer("no number on file"), "hello");
        assert_eq!(link.path(), "/");
        assert!(link.as_str().starts_with("https://wa.me/?text="));
    }
}

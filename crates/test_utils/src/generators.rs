//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{Customer, CustomerId, InsuranceType, Policy};
use proptest::prelude::*;
use proptest::string::string_regex;

/// Strategy for generating product categories
pub fn insurance_type_strategy() -> impl Strategy<Value = InsuranceType> {
    prop_oneof![
        Just(InsuranceType::Bike),
        Just(InsuranceType::Car),
        Just(InsuranceType::Term),
        Just(InsuranceType::Health),
        Just(InsuranceType::Lic),
        Just(InsuranceType::PersonalAccident),
        Just(InsuranceType::HeavyVehicle),
        Just(InsuranceType::Other),
    ]
}

/// Strategy for day offsets spanning lapsed through healthy cover
pub fn day_offset_strategy() -> impl Strategy<Value = i64> {
    -120i64..=120i64
}

/// Strategy for mobile numbers with the separators users actually type
pub fn mobile_strategy() -> impl Strategy<Value = String> {
    string_regex(r"\+?[0-9]{2,3}[-. ]?[0-9]{3}[-. ]?[0-9]{4}").expect("valid mobile pattern")
}

/// Strategy for premium amounts as entered, including absent and blank
pub fn amount_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        (1u32..1_000_000u32).prop_map(|n| Some(n.to_string())),
        ((1u32..100_000u32), (0u32..100u32)).prop_map(|(whole, frac)| {
            Some(format!("{whole}.{frac:02}"))
        }),
    ]
}

/// Strategy for policies whose end date falls near the given day
pub fn policy_strategy(today: NaiveDate) -> impl Strategy<Value = Policy> {
    (
        string_regex("[a-z0-9]{6}").expect("valid record id pattern"),
        insurance_type_strategy(),
        string_regex("[A-Z]{3,5}-[0-9]{3,4}").expect("valid policy number pattern"),
        day_offset_strategy(),
        amount_strategy(),
    )
        .prop_map(move |(id, policy_type, policy_id, offset, amount)| Policy {
            id,
            policy_type,
            policy_id,
            company_name: "Property Mutual".to_string(),
            start_date: today - Duration::days(365),
            end_date: today + Duration::days(offset),
            amount,
        })
}

/// Strategy for customers holding up to four policies
pub fn customer_strategy(today: NaiveDate) -> impl Strategy<Value = Customer> {
    (
        string_regex("CUST-[0-9a-f]{8}").expect("valid customer id pattern"),
        string_regex("[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}").expect("valid name pattern"),
        mobile_strategy(),
        prop::collection::vec(policy_strategy(today), 0..4),
    )
        .prop_map(|(id, name, mobile, policies)| Customer {
            id: CustomerId::new(id),
            name,
            dob: "1988-03-21".to_string(),
            mobile,
            email: "holder@example.net".to_string(),
            address: "9 Harbor Row".to_string(),
            pan: "HRBRW1221K".to_string(),
            smk: "None".to_string(),
            policies,
        })
}

//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for customer and policy records.
//! These fixtures are deterministic so tests can assert on exact values;
//! the `random_*` helpers are for tests that only need plausible shapes.

use chrono::{Duration, NaiveDate};
use core_kernel::{Customer, CustomerId, InsuranceType, Policy};
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::chrono::en::Date;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use once_cell::sync::Lazy;

/// Fixed calendar day used as "today" by deterministic tests.
static REFERENCE_TODAY: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid reference date"));

/// Fixture for calendar test data
pub struct DateFixtures;

impl DateFixtures {
    /// Fixed "today" for tests that must not move with the wall clock
    pub fn today() -> NaiveDate {
        *REFERENCE_TODAY
    }

    /// A day `days` after the fixed today; negative offsets land in the past
    pub fn today_plus(days: i64) -> NaiveDate {
        Self::today() + Duration::days(days)
    }

    /// Standard policy start date, well before the fixed today
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid policy start date")
    }
}

/// Fixture for scalar string fields
pub struct StringFixtures;

impl StringFixtures {
    /// Standard customer name distinct from the demonstration record
    pub fn customer_name() -> &'static str {
        "Ellen Ripley"
    }

    /// Standard date of birth
    pub fn dob() -> &'static str {
        "1990-01-07"
    }

    /// Standard mobile number with separators, for link formatting tests
    pub fn mobile() -> &'static str {
        "555-0112"
    }

    /// Standard email address
    pub fn email() -> &'static str {
        "e.ripley@weyland.example"
    }

    /// Standard postal address
    pub fn address() -> &'static str {
        "42 Nostromo Dock, Thedus"
    }

    /// Standard tax identifier
    pub fn pan() -> &'static str {
        "WYLND5550R"
    }

    /// Standard smoker classification
    pub fn smk() -> &'static str {
        "None"
    }

    /// Standard issuer policy number
    pub fn policy_number() -> &'static str {
        "POL-1001"
    }

    /// Standard insurer name distinct from the demonstration record
    pub fn company_name() -> &'static str {
        "Northwind Mutual"
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic customer id for single-customer tests
    pub fn customer_id() -> CustomerId {
        CustomerId::new("CUST-0001")
    }

    /// A second deterministic customer id for ordering tests
    pub fn other_customer_id() -> CustomerId {
        CustomerId::new("CUST-0002")
    }

    /// Deterministic record id for a policy within its customer
    pub fn policy_record_id() -> &'static str {
        "pol-a1"
    }
}

/// Fixture for customer records
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// The demonstration record pinned to the fixed reference today
    ///
    /// Its first policy ends 8 days after [`DateFixtures::today`] and its
    /// second 25 days after, so one lands in the critical band and one in
    /// the upcoming band.
    pub fn demonstration() -> Customer {
        Customer::demonstration(DateFixtures::today())
    }

    /// A deterministic customer with no policies
    pub fn without_policies() -> Customer {
        Customer {
            id: IdFixtures::customer_id(),
            name: StringFixtures::customer_name().to_string(),
            dob: StringFixtures::dob().to_string(),
            mobile: StringFixtures::mobile().to_string(),
            email: StringFixtures::email().to_string(),
            address: StringFixtures::address().to_string(),
            pan: StringFixtures::pan().to_string(),
            smk: StringFixtures::smk().to_string(),
            policies: Vec::new(),
        }
    }

    /// A deterministic customer holding one policy that ends in `days` days
    pub fn with_policy_ending_in(days: i64) -> Customer {
        let mut customer = Self::without_policies();
        customer.policies.push(PolicyFixtures::ending_in(days));
        customer
    }

    /// A randomly populated customer with no policies
    pub fn random() -> Customer {
        let dob: NaiveDate = Date().fake();
        Customer {
            id: CustomerId::generate(),
            name: Name().fake(),
            dob: dob.to_string(),
            mobile: PhoneNumber().fake(),
            email: SafeEmail().fake(),
            address: format!(
                "{} {}, {}",
                BuildingNumber().fake::<String>(),
                StreetName().fake::<String>(),
                CityName().fake::<String>()
            ),
            pan: StringFixtures::pan().to_string(),
            smk: StringFixtures::smk().to_string(),
            policies: Vec::new(),
        }
    }
}

/// Fixture for policy records
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// A deterministic health policy ending in `days` days from the fixed today
    pub fn ending_in(days: i64) -> Policy {
        Policy {
            id: IdFixtures::policy_record_id().to_string(),
            policy_type: InsuranceType::Health,
            policy_id: StringFixtures::policy_number().to_string(),
            company_name: StringFixtures::company_name().to_string(),
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::today_plus(days),
            amount: Some("15000".to_string()),
        }
    }

    /// A policy with no recorded premium, for aggregate edge cases
    pub fn without_amount(days: i64) -> Policy {
        Policy {
            amount: None,
            ..Self::ending_in(days)
        }
    }

    /// A policy whose premium was entered blank, for aggregate edge cases
    pub fn with_blank_amount(days: i64) -> Policy {
        Policy {
            amount: Some(String::new()),
            ..Self::ending_in(days)
        }
    }
}

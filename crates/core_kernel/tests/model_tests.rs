//! Unit tests for the customer/policy records and identifiers
//!
//! Exercises the public API: wire-format stability, label parsing, and the
//! canonical demonstration record.

use chrono::NaiveDate;
use core_kernel::{Customer, CustomerId, InsuranceType, Policy};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_policy() -> Policy {
    Policy {
        id: "p_1700000000".to_string(),
        policy_type: InsuranceType::HeavyVehicle,
        policy_id: "HV-2231".to_string(),
        company_name: "National General".to_string(),
        start_date: date(2024, 3, 15),
        end_date: date(2025, 3, 15),
        amount: Some("42000".to_string()),
    }
}

mod wire_format_tests {
    use super::*;

    #[test]
    fn test_customer_serializes_with_historical_keys() {
        let customer = Customer {
            id: CustomerId::from("CUST-7"),
            name: "Kyle Reese".to_string(),
            dob: "1985-02-01".to_string(),
            mobile: "(555) 301-9984".to_string(),
            email: "kyle@example.com".to_string(),
            address: "Griffith Park".to_string(),
            pan: "".to_string(),
            smk: "".to_string(),
            policies: vec![sample_policy()],
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "CUST-7");
        assert_eq!(json["policies"][0]["type"], "Heavy Vehicle");
        assert_eq!(json["policies"][0]["policyId"], "HV-2231");
        assert_eq!(json["policies"][0]["companyName"], "National General");
        assert_eq!(json["policies"][0]["endDate"], "2025-03-15");
        assert_eq!(json["policies"][0]["amount"], "42000");
    }

    #[test]
    fn test_customer_round_trips_through_json() {
        let customer = Customer {
            id: CustomerId::from("CUST-7"),
            name: "Kyle Reese".to_string(),
            dob: "".to_string(),
            mobile: "555-3019".to_string(),
            email: "".to_string(),
            address: "".to_string(),
            pan: "".to_string(),
            smk: "".to_string(),
            policies: vec![sample_policy()],
        };

        let text = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&text).unwrap();
        assert_eq!(back, customer);
    }

    #[test]
    fn test_policy_order_is_preserved() {
        let mut first = sample_policy();
        first.id = "p_a".to_string();
        let mut second = sample_policy();
        second.id = "p_b".to_string();

        let payload = json!({
            "id": "CUST-2",
            "name": "Ordered",
            "dob": "", "mobile": "", "email": "", "address": "", "pan": "", "smk": "",
            "policies": [first, second]
        });

        let customer: Customer = serde_json::from_value(payload).unwrap();
        let ids: Vec<&str> = customer.policies.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p_a", "p_b"]);
    }

    #[test]
    fn test_blank_amount_is_carried_not_dropped() {
        let mut policy = sample_policy();
        policy.amount = Some("".to_string());
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["amount"], "");
    }
}

mod insurance_type_tests {
    use super::*;

    #[test]
    fn test_all_labels_are_distinct() {
        let mut labels: Vec<&str> = InsuranceType::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), InsuranceType::ALL.len());
    }

    #[test]
    fn test_multi_word_labels_parse() {
        assert_eq!(
            "Personal Accident".parse::<InsuranceType>().unwrap(),
            InsuranceType::PersonalAccident
        );
        assert_eq!(
            "Heavy Vehicle".parse::<InsuranceType>().unwrap(),
            InsuranceType::HeavyVehicle
        );
        assert_eq!("LIC".parse::<InsuranceType>().unwrap(), InsuranceType::Lic);
    }

    #[test]
    fn test_serde_uses_labels() {
        for t in InsuranceType::ALL {
            let encoded = serde_json::to_value(t).unwrap();
            assert_eq!(encoded, t.label());
        }
    }
}

mod demonstration_tests {
    use super::*;

    #[test]
    fn test_demonstration_identity_is_fixed() {
        let demo = Customer::demonstration(date(2024, 1, 10));
        assert_eq!(demo.id, CustomerId::from("CUST-101"));
        assert_eq!(demo.name, "Sarah Connor");
        assert_eq!(demo.mobile, "555-0199");
        assert_eq!(demo.email, "sarah.c@sky.net");
        assert_eq!(demo.pan, "ABCDE1234F");
    }

    #[test]
    fn test_demonstration_dates_track_seed_day() {
        let demo = Customer::demonstration(date(2024, 12, 28));
        assert_eq!(demo.policies[0].end_date, date(2025, 1, 5));
        assert_eq!(demo.policies[1].end_date, date(2025, 1, 22));
    }

    #[test]
    fn test_demonstration_is_deterministic() {
        let today = date(2024, 6, 1);
        assert_eq!(Customer::demonstration(today), Customer::demonstration(today));
    }
}

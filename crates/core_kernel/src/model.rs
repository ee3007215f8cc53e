//! Customer and Policy records
//!
//! These are plain data records: no behavior beyond construction and
//! serialization lives here. The serialized form is the wire contract shared
//! by every adapter and the HTTP surface, so the policy fields keep their
//! historical camelCase keys and the kind is carried under the `type` key.
//!
//! A `Customer` owns its `policies` exclusively. Policies are never stored or
//! transferred on their own; they are replaced wholesale whenever the parent
//! customer is saved.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::identifiers::CustomerId;

/// Product category of a policy
///
/// The set is closed; anything outside it is carried as `Other`. Serialized
/// values are the human-facing labels, which is what both the stored data and
/// the API payloads have always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    Bike,
    Car,
    Term,
    Health,
    #[serde(rename = "LIC")]
    Lic,
    #[serde(rename = "Personal Accident")]
    PersonalAccident,
    #[serde(rename = "Heavy Vehicle")]
    HeavyVehicle,
    Other,
}

impl InsuranceType {
    /// Every product category, in display order
    pub const ALL: [InsuranceType; 8] = [
        InsuranceType::Bike,
        InsuranceType::Car,
        InsuranceType::Term,
        InsuranceType::Health,
        InsuranceType::Lic,
        InsuranceType::PersonalAccident,
        InsuranceType::HeavyVehicle,
        InsuranceType::Other,
    ];

    /// Returns the display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Bike => "Bike",
            InsuranceType::Car => "Car",
            InsuranceType::Term => "Term",
            InsuranceType::Health => "Health",
            InsuranceType::Lic => "LIC",
            InsuranceType::PersonalAccident => "Personal Accident",
            InsuranceType::HeavyVehicle => "Heavy Vehicle",
            InsuranceType::Other => "Other",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a stored label does not match any product category
#[derive(Debug, Error)]
#[error("unknown insurance type: {0}")]
pub struct UnknownInsuranceType(pub String);

impl FromStr for InsuranceType {
    type Err = UnknownInsuranceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InsuranceType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownInsuranceType(s.to_string()))
    }
}

/// One insurance product owned by a customer
///
/// `id` is unique only within the parent customer's policy set. `policy_id`
/// is the issuer's external policy number and is opaque. Start and end dates
/// are calendar dates with no time component; the end date is only meaningful
/// compared against "today" in the local zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    #[serde(rename = "type")]
    pub policy_type: InsuranceType,
    pub policy_id: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Premium value carried as entered; absent or blank counts as zero in
    /// aggregate computations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// One insured person or household, with its owned policy set
///
/// Every scalar field except `id` is an opaque string; no format is enforced
/// on `dob`, `pan`, or `smk`. Records are mutated only by full replacement
/// through the repository's upsert, never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub dob: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub pan: String,
    pub smk: String,
    #[serde(default)]
    pub policies: Vec<Policy>,
}

impl Customer {
    /// Builds the canonical demonstration record used by `seedIfEmpty`
    ///
    /// End dates are computed relative to the supplied day so the urgency
    /// tiers have one critical and one upcoming policy to show: the first
    /// policy ends in 8 days, the second in 25.
    pub fn demonstration(today: NaiveDate) -> Self {
        let start_of = |year, month, day| {
            NaiveDate::from_ymd_opt(year, month, day).expect("valid demonstration start date")
        };

        Customer {
            id: CustomerId::from("CUST-101"),
            name: "Sarah Connor".to_string(),
            dob: "1984-05-12".to_string(),
            mobile: "555-0199".to_string(),
            email: "sarah.c@sky.net".to_string(),
            address: "123 Resistance Way, LA".to_string(),
            pan: "ABCDE1234F".to_string(),
            smk: "Level 5".to_string(),
            policies: vec![
                Policy {
                    id: "p1".to_string(),
                    policy_type: InsuranceType::Health,
                    policy_id: "HLTH-990".to_string(),
                    company_name: "Cyberdyne Care".to_string(),
                    start_date: start_of(2023, 1, 1),
                    end_date: today + Duration::days(8),
                    amount: Some("15000".to_string()),
                },
                Policy {
                    id: "p2".to_string(),
                    policy_type: InsuranceType::Car,
                    policy_id: "CAR-442".to_string(),
                    company_name: "Motor-Shield".to_string(),
                    start_date: start_of(2023, 5, 1),
                    end_date: today + Duration::days(25),
                    amount: Some("25000".to_string()),
                },
            ],
        }
    }
}

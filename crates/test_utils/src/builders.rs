//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{Customer, CustomerId, InsuranceType, Policy};

use crate::fixtures::{DateFixtures, IdFixtures, StringFixtures};

/// Builder for constructing policy records
pub struct PolicyBuilder {
    id: String,
    policy_type: InsuranceType,
    policy_id: String,
    company_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    amount: Option<String>,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::policy_record_id().to_string(),
            policy_type: InsuranceType::Health,
            policy_id: StringFixtures::policy_number().to_string(),
            company_name: StringFixtures::company_name().to_string(),
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::today_plus(30),
            amount: Some("15000".to_string()),
        }
    }

    /// Sets the record id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the product category
    pub fn with_type(mut self, policy_type: InsuranceType) -> Self {
        self.policy_type = policy_type;
        self
    }

    /// Sets the issuer policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_id = number.into();
        self
    }

    /// Sets the insurer name
    pub fn with_company(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    /// Sets the cover start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    /// Sets the cover end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = date;
        self
    }

    /// Sets the cover end date to `days` after the fixed reference today
    pub fn ending_in(mut self, days: i64) -> Self {
        self.end_date = DateFixtures::today_plus(days);
        self
    }

    /// Sets the premium amount
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Clears the premium amount
    pub fn without_amount(mut self) -> Self {
        self.amount = None;
        self
    }

    /// Builds the policy record
    pub fn build(self) -> Policy {
        Policy {
            id: self.id,
            policy_type: self.policy_type,
            policy_id: self.policy_id,
            company_name: self.company_name,
            start_date: self.start_date,
            end_date: self.end_date,
            amount: self.amount,
        }
    }
}

/// Builder for constructing customer records
pub struct CustomerBuilder {
    id: CustomerId,
    name: String,
    dob: String,
    mobile: String,
    email: String,
    address: String,
    pan: String,
    smk: String,
    policies: Vec<Policy>,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
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

    /// Sets the customer id
    pub fn with_id(mut self, id: impl Into<CustomerId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the customer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the date of birth
    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = dob.into();
        self
    }

    /// Sets the mobile number
    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = mobile.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the tax identifier
    pub fn with_pan(mut self, pan: impl Into<String>) -> Self {
        self.pan = pan.into();
        self
    }

    /// Sets the smoker classification
    pub fn with_smk(mut self, smk: impl Into<String>) -> Self {
        self.smk = smk.into();
        self
    }

    /// Replaces the whole policy set
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Appends one policy to the set
    pub fn add_policy(mut self, policy: Policy) -> Self {
        self.policies.push(policy);
        self
    }

    /// Builds the customer record
    pub fn build(self) -> Customer {
        Customer {
            id: self.id,
            name: self.name,
            dob: self.dob,
            mobile: self.mobile,
            email: self.email,
            address: self.address,
            pan: self.pan,
            smk: self.smk,
            policies: self.policies,
        }
    }
}

//! Directory search over customer records
//!
//! Case-insensitive substring matching across the fields the directory view
//! searches: customer name, email, and any policy's issuer number. A blank
//! term matches everything.

use core_kernel::Customer;

/// Returns true when the customer matches the search term
pub fn matches(customer: &Customer, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    customer.name.to_lowercase().contains(&term)
        || customer.email.to_lowercase().contains(&term)
        || customer
            .policies
            .iter()
            .any(|p| p.policy_id.to_lowercase().contains(&term))
}

/// Filters a customer list down to those matching the term, keeping order
pub fn search(customers: Vec<Customer>, term: &str) -> Vec<Customer> {
    let mut customers = customers;
    customers.retain(|c| matches(c, term));
    customers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CustomerId, InsuranceType, Policy};

    fn customer(name: &str, email: &str, policy_number: &str) -> Customer {
        Customer {
            id: CustomerId::generate(),
            name: name.to_string(),
            dob: String::new(),
            mobile: String::new(),
            email: email.to_string(),
            address: String::new(),
            pan: String::new(),
            smk: String::new(),
            policies: vec![Policy {
                id: "p1".to_string(),
                policy_type: InsuranceType::Term,
                policy_id: policy_number.to_string(),
                company_name: "Acme".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                amount: None,
            }],
        }
    }

    #[test]
    fn test_blank_term_matches_all() {
        let customers = vec![customer("Ada", "ada@example.com", "T-1")];
        assert_eq!(search(customers.clone(), "").len(), 1);
        assert_eq!(search(customers, "   ").len(), 1);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let c = customer("Sarah Connor", "sarah.c@sky.net", "HLTH-990");
        assert!(matches(&c, "sarah"));
        assert!(matches(&c, "CONNOR"));
        assert!(!matches(&c, "reese"));
    }

    #[test]
    fn test_matches_email_and_policy_number() {
        let c = customer("Sarah Connor", "sarah.c@sky.net", "HLTH-990");
        assert!(matches(&c, "sky.net"));
        assert!(matches(&c, "hlth"));
    }

    #[test]
    fn test_search_keeps_input_order() {
        let customers = vec![
            customer("Beta", "b@example.com", "X-1"),
            customer("Alpha", "a@example.com", "X-2"),
            customer("Betamax", "bm@example.com", "X-3"),
        ];
        let hits = search(customers, "beta");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Betamax"]);
    }
}

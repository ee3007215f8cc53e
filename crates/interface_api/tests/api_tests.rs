//! Comprehensive tests for interface_api
//!
//! Every test drives the full router over an in-memory store, asserting
//! the wire envelopes exactly as a browser client would see them.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use domain_customer::MockCustomerStore;
use interface_api::config::StoreBackend;
use interface_api::create_router;

/// Starts a test server over a mock store.
///
/// The backend tag only affects error status mapping; the mock behaves
/// like a local store.
fn test_server(store: MockCustomerStore) -> TestServer {
    let app = create_router(Arc::new(store), StoreBackend::Sqlite);
    TestServer::new(app).expect("test server should start")
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_healthy() {
        let server = test_server(MockCustomerStore::new());

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_probes_the_store() {
        let server = test_server(MockCustomerStore::new());

        let response = server.get("/health/ready").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ready");
    }
}

// ============================================================================
// Customer Endpoint Tests
// ============================================================================

mod customer_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_on_empty_store_returns_empty_envelope() {
        let server = test_server(MockCustomerStore::new());

        let response = server.get("/customers").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["customers"], json!([]));
    }

    #[tokio::test]
    async fn test_saved_customer_round_trips_in_wire_shape() {
        let server = test_server(MockCustomerStore::new());

        let customer = json!({
            "id": "CUST-0001",
            "name": "Ellen Ripley",
            "dob": "1990-01-07",
            "mobile": "555-0112",
            "email": "e.ripley@weyland.example",
            "address": "42 Nostromo Dock, Thedus",
            "pan": "WYLND5550R",
            "smk": "None",
            "policies": [{
                "id": "pol-a1",
                "type": "Health",
                "policyId": "POL-1001",
                "companyName": "Northwind Mutual",
                "startDate": "2023-01-01",
                "endDate": "2026-09-15",
                "amount": "15000"
            }]
        });

        let save = server
            .post("/customers")
            .json(&json!({ "customer": customer }))
            .await;
        save.assert_status_ok();
        let ack: Value = save.json();
        assert_eq!(ack, json!({ "ok": true }));

        let list = server.get("/customers").await;
        list.assert_status_ok();
        let body: Value = list.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["customers"][0]["id"], "CUST-0001");
        assert_eq!(body["customers"][0]["policies"][0]["type"], "Health");
        assert_eq!(body["customers"][0]["policies"][0]["policyId"], "POL-1001");
        assert_eq!(body["customers"][0]["policies"][0]["endDate"], "2026-09-15");
    }

    #[tokio::test]
    async fn test_policy_amount_may_be_absent() {
        let server = test_server(MockCustomerStore::new());

        let response = server
            .post("/customers")
            .json(&json!({
                "customer": {
                    "id": "CUST-0002",
                    "name": "Dana Scully",
                    "dob": "",
                    "mobile": "",
                    "email": "",
                    "address": "",
                    "pan": "",
                    "smk": "",
                    "policies": [{
                        "id": "pol-b1",
                        "type": "Term",
                        "policyId": "TRM-7",
                        "companyName": "Basement Assurance",
                        "startDate": "2024-01-01",
                        "endDate": "2027-01-01"
                    }]
                }
            }))
            .await;

        response.assert_status_ok();
        let body: Value = server.get("/customers").await.json();
        assert_eq!(body["customers"][0]["policies"][0]["amount"], Value::Null);
    }

    #[tokio::test]
    async fn test_search_term_filters_the_listing() {
        let server = test_server(MockCustomerStore::new());

        for (id, name) in [("CUST-0001", "Sarah Connor"), ("CUST-0002", "Ellen Ripley")] {
            server
                .post("/customers")
                .json(&json!({ "customer": {
                    "id": id, "name": name, "dob": "", "mobile": "", "email": "",
                    "address": "", "pan": "", "smk": "", "policies": []
                }}))
                .await
                .assert_status_ok();
        }

        let response = server.get("/customers").add_query_param("q", "ripley").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let customers = body["customers"].as_array().expect("customers array");
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0]["name"], "Ellen Ripley");
    }

    #[tokio::test]
    async fn test_blank_search_term_returns_everyone() {
        let server = test_server(MockCustomerStore::new());

        server
            .post("/customers")
            .json(&json!({ "customer": {
                "id": "CUST-0001", "name": "Sarah Connor", "dob": "", "mobile": "",
                "email": "", "address": "", "pan": "", "smk": "", "policies": []
            }}))
            .await
            .assert_status_ok();

        let body: Value = server
            .get("/customers")
            .add_query_param("q", "   ")
            .await
            .json();

        assert_eq!(body["customers"].as_array().expect("customers array").len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_customer_and_acknowledges_unknown_ids() {
        let server = test_server(MockCustomerStore::new());

        server
            .post("/customers")
            .json(&json!({ "customer": {
                "id": "CUST-0001", "name": "Sarah Connor", "dob": "", "mobile": "",
                "email": "", "address": "", "pan": "", "smk": "", "policies": []
            }}))
            .await
            .assert_status_ok();

        let deleted = server
            .delete("/customers")
            .add_query_param("id", "CUST-0001")
            .await;
        deleted.assert_status_ok();
        let ack: Value = deleted.json();
        assert_eq!(ack["ok"], true);

        let body: Value = server.get("/customers").await.json();
        assert_eq!(body["customers"], json!([]));

        // Unknown id acknowledges without effect
        let again = server
            .delete("/customers")
            .add_query_param("id", "CUST-0001")
            .await;
        again.assert_status_ok();
    }
}

// ============================================================================
// Seed Endpoint Tests
// ============================================================================

mod seed_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_inserts_demonstration_record_once() {
        let server = test_server(MockCustomerStore::new());

        let first = server.get("/seed").await;
        first.assert_status_ok();
        let body: Value = first.json();
        assert_eq!(body["ok"], true);
        assert_eq!(body["seeded"], true);
        assert!(body.get("reason").is_none());

        let second = server.get("/seed").await;
        second.assert_status_ok();
        let body: Value = second.json();
        assert_eq!(body["seeded"], false);
        assert_eq!(body["reason"], "already_has_data");
    }

    #[tokio::test]
    async fn test_seeded_record_is_sarah_connor_with_two_policies() {
        let server = test_server(MockCustomerStore::new());

        server.get("/seed").await.assert_status_ok();

        let body: Value = server.get("/customers").await.json();
        let customers = body["customers"].as_array().expect("customers array");
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0]["id"], "CUST-101");
        assert_eq!(customers[0]["name"], "Sarah Connor");
        assert_eq!(
            customers[0]["policies"].as_array().expect("policies").len(),
            2
        );
    }
}

// ============================================================================
// Renewal Endpoint Tests
// ============================================================================

mod renewal_endpoint_tests {
    use super::*;
    use chrono::{Duration, Local};
    use core_kernel::InsuranceType;
    use test_utils::{CustomerBuilder, PolicyBuilder};

    #[tokio::test]
    async fn test_renewals_rank_policies_most_urgent_first() {
        let today = Local::now().date_naive();
        let customer = CustomerBuilder::new()
            .with_id("CUST-0001")
            .with_name("Sarah Connor")
            .with_policies(vec![
                PolicyBuilder::new()
                    .with_id("pol-1")
                    .with_type(InsuranceType::Car)
                    .with_start_date(today - Duration::days(340))
                    .with_end_date(today + Duration::days(25))
                    .with_amount("25000")
                    .build(),
                PolicyBuilder::new()
                    .with_id("pol-2")
                    .with_type(InsuranceType::Health)
                    .with_start_date(today - Duration::days(340))
                    .with_end_date(today + Duration::days(8))
                    .with_amount("15000")
                    .build(),
            ])
            .build();
        let store = MockCustomerStore::with_customers(vec![customer]).await;
        let server = test_server(store);

        let response = server.get("/renewals").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["ok"], true);

        let renewals = body["renewals"].as_array().expect("renewals array");
        assert_eq!(renewals.len(), 2);
        assert_eq!(renewals[0]["daysRemaining"], 8);
        assert_eq!(renewals[0]["tier"], "critical");
        assert_eq!(renewals[1]["daysRemaining"], 25);
        assert_eq!(renewals[1]["tier"], "upcoming");
        assert!(renewals[0]["link"]
            .as_str()
            .expect("link string")
            .starts_with("https://wa.me/"));
    }

    #[tokio::test]
    async fn test_renewals_summary_totals_the_portfolio() {
        let today = Local::now().date_naive();
        let customer = CustomerBuilder::new()
            .with_policies(vec![
                PolicyBuilder::new()
                    .with_id("pol-1")
                    .with_end_date(today + Duration::days(8))
                    .with_amount("15000")
                    .build(),
                PolicyBuilder::new()
                    .with_id("pol-2")
                    .with_end_date(today + Duration::days(25))
                    .with_amount("25000")
                    .build(),
            ])
            .build();
        let store = MockCustomerStore::with_customers(vec![customer]).await;
        let server = test_server(store);

        let body: Value = server.get("/renewals").await.json();

        let summary = &body["summary"];
        assert_eq!(summary["endingThisWeek"], 0);
        assert_eq!(summary["urgent"], 1);
        assert_eq!(summary["warning"], 0);
        assert_eq!(summary["upcoming"], 1);
        assert_eq!(summary["customers"], 1);
        assert_eq!(summary["premiumTotal"], "40000");
    }

    #[tokio::test]
    async fn test_renewals_on_empty_store_returns_empty_schedule() {
        let server = test_server(MockCustomerStore::new());

        let body: Value = server.get("/renewals").await.json();

        assert_eq!(body["ok"], true);
        assert_eq!(body["renewals"], json!([]));
        assert_eq!(body["summary"]["customers"], 0);
        assert_eq!(body["summary"]["premiumTotal"], "0");
    }
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

mod error_envelope_tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_empty_customer_id_is_rejected_with_envelope() {
        let server = test_server(MockCustomerStore::new());

        let response = server
            .post("/customers")
            .json(&json!({ "customer": {
                "id": "", "name": "Nobody", "dob": "", "mobile": "", "email": "",
                "address": "", "pan": "", "smk": "", "policies": []
            }}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["detail"], "customer id must not be empty");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_with_envelope() {
        let server = test_server(MockCustomerStore::new());

        let response = server
            .post("/customers")
            .content_type("application/json")
            .text("{ this is not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_malformed_policy_date_is_rejected() {
        let server = test_server(MockCustomerStore::new());

        let response = server
            .post("/customers")
            .json(&json!({ "customer": {
                "id": "CUST-0001", "name": "Sarah Connor", "dob": "", "mobile": "",
                "email": "", "address": "", "pan": "", "smk": "",
                "policies": [{
                    "id": "pol-1", "type": "Health", "policyId": "P-1",
                    "companyName": "Acme", "startDate": "01/01/2023",
                    "endDate": "2026-01-01"
                }]
            }}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_delete_without_id_is_rejected_with_envelope() {
        let server = test_server(MockCustomerStore::new());

        let response = server.delete("/customers").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "validation_error");
    }
}

// ============================================================================
// CORS Tests
// ============================================================================

mod cors_tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[tokio::test]
    async fn test_browser_origins_are_allowed() {
        let server = test_server(MockCustomerStore::new());

        let response = server
            .get("/customers")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("http://localhost:5173"),
            )
            .await;

        response.assert_status_ok();
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("allow-origin header");
        assert_eq!(allow_origin, "*");
    }
}

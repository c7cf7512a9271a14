//! Integration tests for the PPN/PPh tax engine.
//!
//! This test suite drives the HTTP router and covers:
//! - End-to-end decomposition of standard invoices
//! - Withholding rate selection through the API
//! - Highlighted settlement scenarios
//! - Plain-text summaries
//! - The schedule endpoint
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use pajak_engine::api::{AppState, create_router};
use pajak_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/indonesia").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, String, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, body_bytes.to_vec())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let (status, _, bytes) = post_raw(router, "/calculate", body.to_string()).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn post_summary(router: Router, body: Value) -> (StatusCode, String, String) {
    let (status, content_type, bytes) = post_raw(router, "/summary", body.to_string()).await;
    (status, content_type, String::from_utf8(bytes).unwrap())
}

fn field(result: &Value, path: &[&str]) -> Decimal {
    let mut value = result;
    for key in path {
        value = &value[*key];
    }
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("Expected a decimal at {:?}, got {:?}", path, other),
    }
}

fn assert_breakdown(result: &Value, expected: [&str; 6]) {
    let names = [
        "tax_base",
        "vat_amount",
        "withholding_amount",
        "cash_under_direct_sale",
        "cash_under_withholding",
        "cash_under_treasury_collection",
    ];
    for (name, value) in names.iter().zip(expected) {
        assert_eq!(
            field(result, &["breakdown", name]),
            decimal(value),
            "breakdown.{} mismatch",
            name
        );
    }
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: End-to-end decomposition
// =============================================================================

#[tokio::test]
async fn test_services_with_npwp_111000() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 111000, "vat_rate": "11", "transaction_type": "services" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, ["100000", "11000", "2000", "111000", "109000", "98000"]);
    assert_eq!(field(&result, &["breakdown", "gross_invoice_total"]), decimal("111000"));
}

#[tokio::test]
async fn test_zero_gross_is_all_zero() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 0, "transaction_type": "services" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, ["0", "0", "0", "0", "0", "0"]);
}

#[tokio::test]
async fn test_negative_gross_is_all_zero() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": -5000, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, ["0", "0", "0", "0", "0", "0"]);
}

#[tokio::test]
async fn test_twelve_percent_vat_retail_goods() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 112000, "vat_rate": 12, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, ["100000", "12000", "0", "112000", "112000", "100000"]);
}

#[tokio::test]
async fn test_default_vat_rate_comes_from_config() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 111000, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(field(&result, &["rates", "vat_rate"]), decimal("11"));
    assert_eq!(field(&result, &["breakdown", "tax_base"]), decimal("100000"));
}

// =============================================================================
// SECTION 2: Withholding rate selection
// =============================================================================

#[tokio::test]
async fn test_services_without_npwp_is_four_percent() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({
            "gross_amount": 111000,
            "transaction_type": "services",
            "has_tax_id": false,
            "is_government_treasurer": true
        }),
    )
    .await;

    assert_eq!(field(&result, &["rates", "withholding_rate"]), decimal("4"));
    assert_eq!(result["withholding_regime"], "pph23");
    assert_eq!(field(&result, &["breakdown", "withholding_amount"]), decimal("4000"));
}

#[tokio::test]
async fn test_goods_to_treasurer_is_pph22() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({
            "gross_amount": 111000,
            "transaction_type": "goods",
            "is_government_treasurer": true
        }),
    )
    .await;

    assert_eq!(field(&result, &["rates", "withholding_rate"]), decimal("1.5"));
    assert_eq!(result["withholding_regime"], "pph22");
    assert_breakdown(&result, ["100000", "11000", "1500", "111000", "109500", "98500"]);
}

#[tokio::test]
async fn test_manual_override_beats_schedule() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({
            "gross_amount": 111000,
            "transaction_type": "services",
            "has_tax_id": false,
            "manual_override_rate": "7.5"
        }),
    )
    .await;

    assert_eq!(field(&result, &["rates", "withholding_rate"]), decimal("7.5"));
    assert_eq!(result["rates"]["withholding_source"], "manual_override");
    assert_eq!(field(&result, &["breakdown", "withholding_amount"]), decimal("7500"));
    assert!(warning_codes(&result).contains(&"MANUAL_WITHHOLDING_RATE".to_string()));
}

// =============================================================================
// SECTION 3: Highlighted scenario
// =============================================================================

#[tokio::test]
async fn test_highlighted_scenarios() {
    let cases = [
        (json!({ "gross_amount": 111000, "transaction_type": "goods" }), "direct_sale"),
        (json!({ "gross_amount": 111000, "transaction_type": "services" }), "withholding"),
        (
            json!({ "gross_amount": 111000, "transaction_type": "services", "is_government_treasurer": true }),
            "treasury_collection",
        ),
    ];

    for (body, expected) in cases {
        let (status, result) = post_calculate(create_router_for_test(), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["highlighted_scenario"], expected);
    }
}

// =============================================================================
// SECTION 4: Audit trace
// =============================================================================

#[tokio::test]
async fn test_audit_trace_cites_legal_basis() {
    let (_, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 111000, "transaction_type": "services" }),
    )
    .await;

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["rule_id"], "withholding_rate");
    assert!(steps[0]["legal_basis"].as_str().unwrap().contains("Pasal 23"));
    assert!(steps.iter().all(|s| !s["legal_basis"].as_str().unwrap().is_empty()));
}

#[tokio::test]
async fn test_custom_vat_rate_warns() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 110000, "vat_rate": 10, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(warning_codes(&result), vec!["CUSTOM_VAT_RATE".to_string()]);
}

// =============================================================================
// SECTION 5: Summary and schedule
// =============================================================================

#[tokio::test]
async fn test_summary_text() {
    let (status, content_type, text) = post_summary(
        create_router_for_test(),
        json!({ "gross_amount": 111000, "transaction_type": "services" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert!(text.contains("Total Invoice: Rp\u{a0}111.000"));
    assert!(text.contains("PPN (11%): Rp\u{a0}11.000"));
    assert!(text.contains("PPh 23 (Jasa) (2%): Rp\u{a0}2.000"));
    assert!(text.contains("- Potong PPh (B2B): Rp\u{a0}109.000"));
    assert!(text.contains("- Potong PPh+PPN (WAPU): Rp\u{a0}98.000"));
}

#[tokio::test]
async fn test_summary_error_is_json() {
    let (status, content_type, text) = post_summary(
        create_router_for_test(),
        json!({ "gross_amount": 1000, "vat_rate": -100, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, "application/json");
    let error: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(error["code"], "UNDEFINED_TAX_BASE");
}

#[tokio::test]
async fn test_schedule_endpoint() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/schedule")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let schedule: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(schedule["regime"]["code"], "ID-PPN-PPH");
    assert_eq!(field(&schedule, &["withholding", "services", "with_tax_id"]), decimal("2"));
    assert_eq!(field(&schedule, &["withholding", "services", "without_tax_id"]), decimal("4"));
    assert_eq!(
        field(&schedule, &["withholding", "goods", "government_treasurer"]),
        decimal("1.5")
    );
    assert_eq!(field(&schedule, &["withholding", "goods", "retail"]), decimal("0"));
}

// =============================================================================
// SECTION 6: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, _, bytes) =
        post_raw(create_router_for_test(), "/calculate", "{invalid json".to_string()).await;
    let error: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_transaction_type_returns_400() {
    let (status, error) =
        post_calculate(create_router_for_test(), json!({ "gross_amount": 111000 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("transaction_type"));
}

#[tokio::test]
async fn test_unknown_transaction_type_returns_400() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 111000, "transaction_type": "rent" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_vat_rate_minus_100_returns_400() {
    let (status, error) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 1000, "vat_rate": -100, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "UNDEFINED_TAX_BASE");
}

#[tokio::test]
async fn test_vat_rate_minus_100_with_zero_gross_is_ok() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        json!({ "gross_amount": 0, "vat_rate": -100, "transaction_type": "goods" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, ["0", "0", "0", "0", "0", "0"]);
}

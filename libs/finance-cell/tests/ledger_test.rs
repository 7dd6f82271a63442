use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use finance_cell::router::finance_routes;
use shared_models::{Role, Transaction, TransactionStatus, TransactionType};
use shared_utils::fixtures::{company_fixture, test_state, user_fixture};

struct TestApp {
    app: Router,
    admin_token: String,
    booking_token: String,
}

fn entry(company_id: Uuid, amount: f64, transaction_type: TransactionType, age_days: i64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        company_id,
        date: Utc::now() - Duration::days(age_days),
        amount,
        transaction_type,
        description: "Lançamento de teste".to_string(),
        status: TransactionStatus::Paid,
        category: "Geral".to_string(),
        payment_method: None,
        provider_id: None,
        reference_id: None,
    }
}

async fn spawn_app() -> TestApp {
    let state = test_state();
    let company = company_fixture();
    let other_company = company_fixture();
    let admin = user_fixture(company.id, Role::CompanyAdmin);
    let booking_user = user_fixture(company.id, Role::Client);

    let admin_token = admin.id.to_string();
    let booking_token = booking_user.id.to_string();

    state
        .store
        .transactions
        .insert_unchecked(entry(company.id, 300.0, TransactionType::Income, 2))
        .await;
    state
        .store
        .transactions
        .insert_unchecked(entry(company.id, 120.0, TransactionType::Expense, 1))
        .await;
    state
        .store
        .transactions
        .insert_unchecked(entry(company.id, 80.0, TransactionType::Income, 0))
        .await;
    state
        .store
        .transactions
        .insert_unchecked(entry(other_company.id, 999.0, TransactionType::Income, 0))
        .await;

    state.store.companies.insert_unchecked(company).await;
    state.store.companies.insert_unchecked(other_company).await;
    state.store.users.insert_unchecked(admin).await;
    state.store.users.insert_unchecked(booking_user).await;

    TestApp {
        app: finance_routes(state),
        admin_token,
        booking_token,
    }
}

fn request(token: &str, method: &str, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token));
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn summary_folds_both_sides_of_the_ledger() {
    let harness = spawn_app().await;

    let response = harness
        .app
        .clone()
        .oneshot(request(&harness.admin_token, "GET", "/summary", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["summary"]["income"], 380.0);
    assert_eq!(body["summary"]["expense"], 120.0);
    assert_eq!(body["summary"]["net"], 260.0);
}

#[tokio::test]
async fn listing_is_newest_first_and_company_scoped() {
    let harness = spawn_app().await;

    let response = harness
        .app
        .clone()
        .oneshot(request(&harness.admin_token, "GET", "/", None))
        .await
        .unwrap();

    let body = read_json(response).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["transactions"][0]["amount"], 80.0);
    assert_eq!(body["transactions"][2]["amount"], 300.0);
}

#[tokio::test]
async fn manual_entry_defaults_to_pending_now() {
    let harness = spawn_app().await;

    let response = harness
        .app
        .clone()
        .oneshot(request(
            &harness.admin_token,
            "POST",
            "/",
            Some(&json!({
                "amount": 45.5,
                "type": "EXPENSE",
                "description": "Produtos de limpeza",
                "category": "Insumos"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["transaction"]["status"], "PENDING");
    assert_eq!(body["transaction"]["type"], "EXPENSE");
    assert!(body["transaction"]["date"].as_str().is_some());
    assert!(body["transaction"].get("referenceId").is_none());
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let harness = spawn_app().await;

    for amount in [0.0, -10.0] {
        let response = harness
            .app
            .clone()
            .oneshot(request(
                &harness.admin_token,
                "POST",
                "/",
                Some(&json!({
                    "amount": amount,
                    "type": "INCOME",
                    "description": "Inválido",
                    "category": "Geral"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn finance_is_admin_only() {
    let harness = spawn_app().await;

    for uri in ["/", "/summary"] {
        let response = harness
            .app
            .clone()
            .oneshot(request(&harness.booking_token, "GET", uri, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use common::spawn_backend;
use serde_json::{json, Value};
use wallet_dashboard::errors::DashboardError;
use wallet_dashboard::models::{InvoiceStatus, Ledger, Permission};
use wallet_dashboard::server::WalletClient;

const TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Default)]
struct Received {
    ids: Arc<Mutex<Vec<String>>>,
}

async fn list_invoices() -> Json<Value> {
    Json(json!([
        {
            "id": "inv-1",
            "wallet_id": "wallet-1",
            "description": "Coffee",
            "amount_msat": 21000,
            "status": "Settled",
            "ledger": "Lightning",
            "payment_time": "2024-03-01T12:35:00Z",
            "created_at": "2024-03-01T12:34:56.789Z"
        }
    ]))
}

async fn list_api_keys() -> Json<Value> {
    Json(json!([
        {
            "id": "key-1",
            "user_id": "user-1",
            "name": "ci",
            "permissions": ["read:wallet", "write:api_key"],
            "created_at": "2024-01-01T00:00:00Z",
            "expires_at": null
        }
    ]))
}

async fn delete_payments(
    State(received): State<Received>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<u64> {
    let ids: Vec<String> = query
        .into_iter()
        .filter(|(key, _)| key == "ids")
        .map(|(_, id)| id)
        .collect();
    let count = ids.len() as u64;
    if let Ok(mut stored) = received.ids.lock() {
        stored.extend(ids);
    }
    Json(count)
}

async fn revoke_api_key(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "404", "reason": format!("API key {id} not found") })),
    )
}

async fn balance(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer secret");

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "status": "401", "reason": "Invalid token" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "received_msat": 50000,
            "sent_msat": 20000,
            "fees_paid_msat": 1000,
            "available_msat": 29000
        })),
    )
}

async fn broken_ln_addresses() -> &'static str {
    "not json"
}

fn mock_backend(received: Received) -> Router {
    Router::new()
        .route("/v1/invoices", get(list_invoices))
        .route("/v1/api-keys", get(list_api_keys))
        .route("/v1/api-keys/{id}", delete(revoke_api_key))
        .route("/v1/payments", delete(delete_payments))
        .route("/v1/me/balance", get(balance))
        .route("/v1/lightning-addresses", get(broken_ln_addresses))
        .with_state(received)
}

#[tokio::test]
async fn test_list_invoices_keeps_timestamps() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, None, TIMEOUT)?;

    let invoices = client.list_invoices().await?;

    assert_eq!(invoices.len(), 1);
    let invoice = &invoices[0];
    assert_eq!(invoice.status, InvoiceStatus::Settled);
    assert_eq!(invoice.ledger, Ledger::Lightning);
    assert_eq!(invoice.amount_msat, Some(21_000));
    assert_eq!(invoice.bolt11, None);

    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 34, 56).unwrap()
        + chrono::Duration::milliseconds(789);
    assert_eq!(invoice.created_at.timestamp_millis(), expected.timestamp_millis());

    // Serializing and parsing again lands on the same instant
    let encoded = serde_json::to_string(invoice)?;
    let decoded: wallet_dashboard::models::Invoice = serde_json::from_str(&encoded)?;
    assert_eq!(
        decoded.created_at.timestamp_millis(),
        invoice.created_at.timestamp_millis()
    );
    assert_eq!(decoded.payment_time, invoice.payment_time);

    Ok(())
}

#[tokio::test]
async fn test_list_api_keys_parses_permissions() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, None, TIMEOUT)?;

    let keys = client.list_api_keys().await?;

    assert_eq!(keys[0].permissions, vec![Permission::ReadWallet, Permission::WriteApiKey]);
    assert_eq!(keys[0].expires_at, None);

    Ok(())
}

#[tokio::test]
async fn test_bulk_delete_sends_repeated_ids() -> anyhow::Result<()> {
    let received = Received::default();
    let base_url = spawn_backend(mock_backend(received.clone())).await?;
    let client = WalletClient::new(format!("{base_url}/"), None, TIMEOUT)?;

    let count = client
        .delete_payments(vec!["p-1".to_string(), "p-2".to_string()])
        .await?;

    assert_eq!(count, 2);
    let ids = received.ids.lock().map(|ids| ids.clone()).unwrap_or_default();
    assert_eq!(ids, vec!["p-1".to_string(), "p-2".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_error_body_becomes_api_error() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, None, TIMEOUT)?;

    let err = client.revoke_api_key("key-9").await.unwrap_err();

    assert_eq!(
        err,
        DashboardError::Api {
            status: 404,
            reason: "API key key-9 not found".to_string(),
        }
    );
    assert_eq!(err.reason(), "API key key-9 not found");

    Ok(())
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, None, TIMEOUT)?;

    let err = client.get_balance().await.unwrap_err();
    assert!(matches!(err, DashboardError::Api { status: 401, .. }));

    let balance = client
        .with_token(Some("secret".to_string()))
        .get_balance()
        .await?;
    assert_eq!(balance.available_msat, 29_000);

    Ok(())
}

#[tokio::test]
async fn test_configured_token_is_the_fallback() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, Some("secret".to_string()), TIMEOUT)?;

    let balance = client.with_token(None).get_balance().await?;
    assert_eq!(balance.received_msat, 50_000);

    Ok(())
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() -> anyhow::Result<()> {
    let base_url = spawn_backend(mock_backend(Received::default())).await?;
    let client = WalletClient::new(base_url, None, TIMEOUT)?;

    let err = client.list_ln_addresses().await.unwrap_err();
    assert!(matches!(err, DashboardError::Decode { .. }));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() -> anyhow::Result<()> {
    // Reserve a port, then free it so nothing listens there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = WalletClient::new(format!("http://{addr}"), None, TIMEOUT)?;
    let err = client.list_payments().await.unwrap_err();

    assert!(err.is_transport());

    Ok(())
}

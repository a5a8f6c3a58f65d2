use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::errors::DashboardError;
use crate::models::{ApiKey, Invoice, LnAddress, Payment, WalletBalance};
#[cfg(feature = "ssr")]
use crate::server::client::WalletClient;

// AppState structure that will be provided as context (SSR only)
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub client: WalletClient,
}

/// Client for the current request. A bearer token on the incoming request
/// takes precedence over the configured one.
#[cfg(feature = "ssr")]
async fn wallet_client() -> Result<WalletClient, ServerFnError> {
    use axum_extra::headers::{authorization::Bearer, Authorization};
    use axum_extra::TypedHeader;

    let app_state = use_context::<AppState>().ok_or_else(|| {
        DashboardError::transport("wallet client not configured").into_server_fn_error()
    })?;

    let token = leptos_axum::extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()
        .map(|TypedHeader(auth)| auth.token().to_string());

    Ok(app_state.client.with_token(token))
}

#[cfg(feature = "ssr")]
fn to_server_err(err: DashboardError) -> ServerFnError {
    err.into_server_fn_error()
}

// ===== API keys =====

#[server]
pub async fn list_api_keys_fn() -> Result<Vec<ApiKey>, ServerFnError> {
    let client = wallet_client().await?;
    client.list_api_keys().await.map_err(to_server_err)
}

#[server]
pub async fn revoke_api_key_fn(id: String) -> Result<(), ServerFnError> {
    let client = wallet_client().await?;
    client.revoke_api_key(&id).await.map_err(to_server_err)
}

#[server]
pub async fn revoke_api_keys_fn(ids: Vec<String>) -> Result<u64, ServerFnError> {
    let client = wallet_client().await?;
    client.revoke_api_keys(ids).await.map_err(to_server_err)
}

// ===== LN addresses =====

#[server]
pub async fn list_ln_addresses_fn() -> Result<Vec<LnAddress>, ServerFnError> {
    let client = wallet_client().await?;
    client.list_ln_addresses().await.map_err(to_server_err)
}

#[server]
pub async fn delete_ln_address_fn(id: String) -> Result<(), ServerFnError> {
    let client = wallet_client().await?;
    client.delete_ln_address(&id).await.map_err(to_server_err)
}

#[server]
pub async fn delete_ln_addresses_fn(ids: Vec<String>) -> Result<u64, ServerFnError> {
    let client = wallet_client().await?;
    client.delete_ln_addresses(ids).await.map_err(to_server_err)
}

// ===== Invoices =====

#[server]
pub async fn list_invoices_fn() -> Result<Vec<Invoice>, ServerFnError> {
    let client = wallet_client().await?;
    client.list_invoices().await.map_err(to_server_err)
}

#[server]
pub async fn delete_invoice_fn(id: String) -> Result<(), ServerFnError> {
    let client = wallet_client().await?;
    client.delete_invoice(&id).await.map_err(to_server_err)
}

#[server]
pub async fn delete_invoices_fn(ids: Vec<String>) -> Result<u64, ServerFnError> {
    let client = wallet_client().await?;
    client.delete_invoices(ids).await.map_err(to_server_err)
}

// ===== Payments =====

#[server]
pub async fn list_payments_fn() -> Result<Vec<Payment>, ServerFnError> {
    let client = wallet_client().await?;
    client.list_payments().await.map_err(to_server_err)
}

#[server]
pub async fn delete_payment_fn(id: String) -> Result<(), ServerFnError> {
    let client = wallet_client().await?;
    client.delete_payment(&id).await.map_err(to_server_err)
}

#[server]
pub async fn delete_payments_fn(ids: Vec<String>) -> Result<u64, ServerFnError> {
    let client = wallet_client().await?;
    client.delete_payments(ids).await.map_err(to_server_err)
}

// ===== Wallet =====

#[server]
pub async fn get_balance_fn() -> Result<WalletBalance, ServerFnError> {
    let client = wallet_client().await?;
    client.get_balance().await.map_err(to_server_err)
}

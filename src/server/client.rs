use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::dto::{DeletedCount, ErrorResponse, IdsFilter};
use crate::errors::DashboardError;
use crate::models::{ApiKey, Invoice, LnAddress, Payment, WalletBalance};

pub const API_KEYS_PATH: &str = "/v1/api-keys";
pub const LN_ADDRESSES_PATH: &str = "/v1/lightning-addresses";
pub const INVOICES_PATH: &str = "/v1/invoices";
pub const PAYMENTS_PATH: &str = "/v1/payments";
pub const BALANCE_PATH: &str = "/v1/me/balance";

/// HTTP client for the wallet backend's REST API.
///
/// Every call returns the decoded body or a [`DashboardError`]; backend
/// errors arrive as `{ status, reason }` bodies and are never panics.
#[derive(Clone)]
pub struct WalletClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl WalletClient {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DashboardError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Same client, authenticating with `token` instead of the configured one.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token: token.or_else(|| self.token.clone()),
            ..self.clone()
        }
    }

    // ===== API keys =====

    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>, DashboardError> {
        self.get(API_KEYS_PATH).await
    }

    pub async fn revoke_api_key(&self, id: &str) -> Result<(), DashboardError> {
        self.delete_one(API_KEYS_PATH, id).await
    }

    pub async fn revoke_api_keys(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        self.delete_many(API_KEYS_PATH, ids).await
    }

    // ===== LN addresses =====

    pub async fn list_ln_addresses(&self) -> Result<Vec<LnAddress>, DashboardError> {
        self.get(LN_ADDRESSES_PATH).await
    }

    pub async fn delete_ln_address(&self, id: &str) -> Result<(), DashboardError> {
        self.delete_one(LN_ADDRESSES_PATH, id).await
    }

    pub async fn delete_ln_addresses(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        self.delete_many(LN_ADDRESSES_PATH, ids).await
    }

    // ===== Invoices =====

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, DashboardError> {
        self.get(INVOICES_PATH).await
    }

    pub async fn delete_invoice(&self, id: &str) -> Result<(), DashboardError> {
        self.delete_one(INVOICES_PATH, id).await
    }

    pub async fn delete_invoices(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        self.delete_many(INVOICES_PATH, ids).await
    }

    // ===== Payments =====

    pub async fn list_payments(&self) -> Result<Vec<Payment>, DashboardError> {
        self.get(PAYMENTS_PATH).await
    }

    pub async fn delete_payment(&self, id: &str) -> Result<(), DashboardError> {
        self.delete_one(PAYMENTS_PATH, id).await
    }

    pub async fn delete_payments(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        self.delete_many(PAYMENTS_PATH, ids).await
    }

    // ===== Wallet =====

    pub async fn get_balance(&self) -> Result<WalletBalance, DashboardError> {
        self.get(BALANCE_PATH).await
    }

    // ===== Internals =====

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let response = send(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    async fn delete_one(&self, path: &str, id: &str) -> Result<(), DashboardError> {
        tracing::info!(path, id, "Deleting resource");
        let path = format!("{path}/{id}");
        send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn delete_many(&self, path: &str, ids: Vec<String>) -> Result<u64, DashboardError> {
        tracing::info!(path, count = ids.len(), "Deleting resources");
        let filter = IdsFilter::new(ids);
        let response = send(self.request(Method::DELETE, path).query(&filter.to_query())).await?;
        let DeletedCount(count) = decode(response).await?;
        Ok(count)
    }
}

async fn send(builder: RequestBuilder) -> Result<reqwest::Response, DashboardError> {
    let response = builder
        .send()
        .await
        .map_err(|e| DashboardError::transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, body = %body, "Wallet API returned an error");
    Err(api_error(status, &body))
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, DashboardError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| DashboardError::transport(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| DashboardError::decode(e.to_string()))
}

fn api_error(status: StatusCode, body: &str) -> DashboardError {
    let reason = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => err.reason,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => body.trim().to_string(),
    };

    DashboardError::Api {
        status: status.as_u16(),
        reason,
    }
}

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};
use wallet_dashboard::cache::{CacheKey, Invalidate};
use wallet_dashboard::errors::DashboardError;
use wallet_dashboard::list::RowBackend;
use wallet_dashboard::models::{
    ApiKey, Invoice, InvoiceStatus, Ledger, LnAddress, Payment, PaymentStatus,
};
use wallet_dashboard::notify::{Notifier, NotifyLevel};

pub fn at_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
}

pub fn api_key(id: &str, name: &str, created_at: DateTime<Utc>) -> ApiKey {
    ApiKey {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        name: name.to_string(),
        description: None,
        permissions: Vec::new(),
        created_at,
        expires_at: None,
    }
}

pub fn ln_address(id: &str, username: &str, active: bool) -> LnAddress {
    LnAddress {
        id: id.to_string(),
        wallet_id: "wallet-1".to_string(),
        username: username.to_string(),
        nostr_pubkey: None,
        active,
        allows_nostr: false,
        created_at: at_day(1),
        updated_at: None,
    }
}

pub fn invoice(id: &str, status: InvoiceStatus, ledger: Ledger, created_at: DateTime<Utc>) -> Invoice {
    Invoice {
        id: id.to_string(),
        wallet_id: "wallet-1".to_string(),
        ln_address_id: None,
        description: None,
        amount_msat: Some(1_000),
        amount_received_msat: None,
        fee_msat: None,
        status,
        ledger,
        bolt11: None,
        payment_hash: None,
        payment_time: None,
        expires_at: None,
        created_at,
    }
}

pub fn payment(id: &str, status: PaymentStatus, amount_msat: u64, created_at: DateTime<Utc>) -> Payment {
    Payment {
        id: id.to_string(),
        wallet_id: "wallet-1".to_string(),
        ln_address: None,
        description: None,
        amount_msat,
        fee_msat: None,
        status,
        ledger: Ledger::Lightning,
        payment_hash: None,
        payment_preimage: None,
        error: None,
        payment_time: None,
        created_at,
    }
}

pub fn ids<R: wallet_dashboard::list::ListRecord>(rows: &[R]) -> Vec<String> {
    rows.iter().map(|row| row.id().to_string()).collect()
}

// ===== Row action doubles =====

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(NotifyLevel, String)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(NotifyLevel, String)> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotifyLevel, message: String) {
        self.messages.borrow_mut().push((level, message));
    }
}

#[derive(Debug, Default)]
pub struct RecordingCache {
    pub invalidated: RefCell<Vec<CacheKey>>,
}

impl Invalidate for RecordingCache {
    fn invalidate(&self, key: CacheKey) {
        self.invalidated.borrow_mut().push(key);
    }
}

/// Backend that either confirms every delete or fails all of them.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub failure: Option<DashboardError>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl MockBackend {
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(DashboardError::Api {
                status: 500,
                reason: reason.to_string(),
            }),
            calls: RefCell::default(),
        }
    }
}

impl RowBackend for MockBackend {
    async fn delete_one(&self, id: String) -> Result<(), DashboardError> {
        self.calls.borrow_mut().push(vec![id]);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        let count = ids.len() as u64;
        self.calls.borrow_mut().push(ids);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(count),
        }
    }
}

// ===== Mock wallet backend =====

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: axum::Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{addr}"))
}

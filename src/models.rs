use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Closed enumerations shared with the wallet backend. Wire names follow the
// backend's JSON exactly.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ledger {
    Lightning,
    Internal,
    Onchain,
}

impl Ledger {
    pub const ALL: [Ledger; 3] = [Ledger::Lightning, Ledger::Internal, Ledger::Onchain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ledger::Lightning => "Lightning",
            Ledger::Internal => "Internal",
            Ledger::Onchain => "Onchain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Settled,
    Expired,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Settled => "Settled",
            InvoiceStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Settled,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Settled => "Settled",
            PaymentStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "read:wallet")]
    ReadWallet,
    #[serde(rename = "write:wallet")]
    WriteWallet,
    #[serde(rename = "read:ln_address")]
    ReadLnAddress,
    #[serde(rename = "write:ln_address")]
    WriteLnAddress,
    #[serde(rename = "read:transaction")]
    ReadTransaction,
    #[serde(rename = "write:transaction")]
    WriteTransaction,
    #[serde(rename = "read:ln_node")]
    ReadLnNode,
    #[serde(rename = "write:ln_node")]
    WriteLnNode,
    #[serde(rename = "read:api_key")]
    ReadApiKey,
    #[serde(rename = "write:api_key")]
    WriteApiKey,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadWallet => "read:wallet",
            Permission::WriteWallet => "write:wallet",
            Permission::ReadLnAddress => "read:ln_address",
            Permission::WriteLnAddress => "write:ln_address",
            Permission::ReadTransaction => "read:transaction",
            Permission::WriteTransaction => "write:transaction",
            Permission::ReadLnNode => "read:ln_node",
            Permission::WriteLnNode => "write:ln_node",
            Permission::ReadApiKey => "read:api_key",
            Permission::WriteApiKey => "write:api_key",
        }
    }
}

/// Derived from `expires_at`, never sent by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus {
    Active,
    Expired,
}

impl ApiKeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyStatus::Active => "Active",
            ApiKeyStatus::Expired => "Expired",
        }
    }
}

/// Derived from the `active` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LnAddressStatus {
    Active,
    Inactive,
}

impl LnAddressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LnAddressStatus::Active => "Active",
            LnAddressStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub wallet_id: String,
    #[serde(default)]
    pub ln_address_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount_msat: Option<u64>,
    #[serde(default)]
    pub amount_received_msat: Option<u64>,
    #[serde(default)]
    pub fee_msat: Option<u64>,
    pub status: InvoiceStatus,
    pub ledger: Ledger,
    #[serde(default)]
    pub bolt11: Option<String>,
    #[serde(default)]
    pub payment_hash: Option<String>,
    #[serde(default)]
    pub payment_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub wallet_id: String,
    #[serde(default)]
    pub ln_address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub amount_msat: u64,
    #[serde(default)]
    pub fee_msat: Option<u64>,
    pub status: PaymentStatus,
    pub ledger: Ledger,
    #[serde(default)]
    pub payment_hash: Option<String>,
    #[serde(default)]
    pub payment_preimage: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub payment_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl ApiKey {
    pub fn status_at(&self, now: DateTime<Utc>) -> ApiKeyStatus {
        match self.expires_at {
            Some(expires_at) if expires_at <= now => ApiKeyStatus::Expired,
            _ => ApiKeyStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnAddress {
    pub id: String,
    pub wallet_id: String,
    pub username: String,
    #[serde(default)]
    pub nostr_pubkey: Option<String>,
    pub active: bool,
    pub allows_nostr: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub received_msat: u64,
    pub sent_msat: u64,
    pub fees_paid_msat: u64,
    pub available_msat: i64,
}

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::sort::{cmp_opt_text, cmp_text};
use super::ListRecord;
use crate::models::{
    ApiKey, ApiKeyStatus, Invoice, InvoiceStatus, Ledger, LnAddress, LnAddressStatus, Payment,
    PaymentStatus,
};

/// Column metadata shared by every table head.
pub trait ColumnDef: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// Stable id, also used as the `data-column` attribute.
    fn id(&self) -> &'static str;
    fn label(&self) -> &'static str;
}

// ===== API keys =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyColumn {
    Name,
    Permissions,
    CreatedAt,
    ExpiresAt,
}

impl ColumnDef for ApiKeyColumn {
    const ALL: &'static [Self] = &[
        ApiKeyColumn::Name,
        ApiKeyColumn::Permissions,
        ApiKeyColumn::CreatedAt,
        ApiKeyColumn::ExpiresAt,
    ];

    fn id(&self) -> &'static str {
        match self {
            ApiKeyColumn::Name => "name",
            ApiKeyColumn::Permissions => "permissions",
            ApiKeyColumn::CreatedAt => "created_at",
            ApiKeyColumn::ExpiresAt => "expires_at",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiKeyColumn::Name => "Name",
            ApiKeyColumn::Permissions => "Permissions",
            ApiKeyColumn::CreatedAt => "Created",
            ApiKeyColumn::ExpiresAt => "Expires",
        }
    }
}

impl ListRecord for ApiKey {
    type Column = ApiKeyColumn;
    type Status = ApiKeyStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn keyword_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.id.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn status(&self) -> ApiKeyStatus {
        self.status_at(Utc::now())
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn compare(&self, other: &Self, column: ApiKeyColumn) -> Ordering {
        match column {
            ApiKeyColumn::Name => cmp_text(&self.name, &other.name),
            ApiKeyColumn::Permissions => self.permissions.len().cmp(&other.permissions.len()),
            ApiKeyColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            ApiKeyColumn::ExpiresAt => self.expires_at.cmp(&other.expires_at),
        }
    }
}

// ===== LN addresses =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LnAddressColumn {
    Username,
    WalletId,
    Active,
    CreatedAt,
    UpdatedAt,
}

impl ColumnDef for LnAddressColumn {
    const ALL: &'static [Self] = &[
        LnAddressColumn::Username,
        LnAddressColumn::WalletId,
        LnAddressColumn::Active,
        LnAddressColumn::CreatedAt,
        LnAddressColumn::UpdatedAt,
    ];

    fn id(&self) -> &'static str {
        match self {
            LnAddressColumn::Username => "username",
            LnAddressColumn::WalletId => "wallet_id",
            LnAddressColumn::Active => "active",
            LnAddressColumn::CreatedAt => "created_at",
            LnAddressColumn::UpdatedAt => "updated_at",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LnAddressColumn::Username => "Username",
            LnAddressColumn::WalletId => "Wallet",
            LnAddressColumn::Active => "Status",
            LnAddressColumn::CreatedAt => "Created",
            LnAddressColumn::UpdatedAt => "Updated",
        }
    }
}

impl ListRecord for LnAddress {
    type Column = LnAddressColumn;
    type Status = LnAddressStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn keyword_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.username.as_str(),
            self.wallet_id.as_str(),
            self.id.as_str(),
        ];
        if let Some(pubkey) = &self.nostr_pubkey {
            fields.push(pubkey);
        }
        fields
    }

    fn status(&self) -> LnAddressStatus {
        if self.active {
            LnAddressStatus::Active
        } else {
            LnAddressStatus::Inactive
        }
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn compare(&self, other: &Self, column: LnAddressColumn) -> Ordering {
        match column {
            LnAddressColumn::Username => cmp_text(&self.username, &other.username),
            LnAddressColumn::WalletId => self.wallet_id.cmp(&other.wallet_id),
            LnAddressColumn::Active => self.active.cmp(&other.active),
            LnAddressColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            LnAddressColumn::UpdatedAt => self.updated_at.cmp(&other.updated_at),
        }
    }
}

// ===== Invoices and payments =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionColumn {
    Description,
    Amount,
    Fee,
    Ledger,
    Status,
    CreatedAt,
    PaymentTime,
}

impl ColumnDef for TransactionColumn {
    const ALL: &'static [Self] = &[
        TransactionColumn::Description,
        TransactionColumn::Amount,
        TransactionColumn::Fee,
        TransactionColumn::Ledger,
        TransactionColumn::Status,
        TransactionColumn::CreatedAt,
        TransactionColumn::PaymentTime,
    ];

    fn id(&self) -> &'static str {
        match self {
            TransactionColumn::Description => "description",
            TransactionColumn::Amount => "amount_msat",
            TransactionColumn::Fee => "fee_msat",
            TransactionColumn::Ledger => "ledger",
            TransactionColumn::Status => "status",
            TransactionColumn::CreatedAt => "created_at",
            TransactionColumn::PaymentTime => "payment_time",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TransactionColumn::Description => "Description",
            TransactionColumn::Amount => "Amount",
            TransactionColumn::Fee => "Fee",
            TransactionColumn::Ledger => "Ledger",
            TransactionColumn::Status => "Status",
            TransactionColumn::CreatedAt => "Created",
            TransactionColumn::PaymentTime => "Paid",
        }
    }
}

fn ledger_order(a: Ledger, b: Ledger) -> Ordering {
    a.as_str().cmp(b.as_str())
}

impl ListRecord for Invoice {
    type Column = TransactionColumn;
    type Status = InvoiceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn keyword_fields(&self) -> Vec<&str> {
        [
            Some(self.id.as_str()),
            Some(self.wallet_id.as_str()),
            self.description.as_deref(),
            self.payment_hash.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status(&self) -> InvoiceStatus {
        self.status
    }

    fn ledger(&self) -> Option<Ledger> {
        Some(self.ledger)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn compare(&self, other: &Self, column: TransactionColumn) -> Ordering {
        match column {
            TransactionColumn::Description => {
                cmp_opt_text(self.description.as_deref(), other.description.as_deref())
            }
            TransactionColumn::Amount => self.amount_msat.cmp(&other.amount_msat),
            TransactionColumn::Fee => self.fee_msat.cmp(&other.fee_msat),
            TransactionColumn::Ledger => ledger_order(self.ledger, other.ledger),
            TransactionColumn::Status => self.status.as_str().cmp(other.status.as_str()),
            TransactionColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            TransactionColumn::PaymentTime => self.payment_time.cmp(&other.payment_time),
        }
    }
}

impl ListRecord for Payment {
    type Column = TransactionColumn;
    type Status = PaymentStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn keyword_fields(&self) -> Vec<&str> {
        [
            Some(self.id.as_str()),
            Some(self.wallet_id.as_str()),
            self.description.as_deref(),
            self.ln_address.as_deref(),
            self.payment_hash.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status(&self) -> PaymentStatus {
        self.status
    }

    fn ledger(&self) -> Option<Ledger> {
        Some(self.ledger)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn compare(&self, other: &Self, column: TransactionColumn) -> Ordering {
        match column {
            TransactionColumn::Description => {
                cmp_opt_text(self.description.as_deref(), other.description.as_deref())
            }
            TransactionColumn::Amount => self.amount_msat.cmp(&other.amount_msat),
            TransactionColumn::Fee => self.fee_msat.cmp(&other.fee_msat),
            TransactionColumn::Ledger => ledger_order(self.ledger, other.ledger),
            TransactionColumn::Status => self.status.as_str().cmp(other.status.as_str()),
            TransactionColumn::CreatedAt => self.created_at.cmp(&other.created_at),
            TransactionColumn::PaymentTime => self.payment_time.cmp(&other.payment_time),
        }
    }
}

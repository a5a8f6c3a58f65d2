//! Row action backends, one per collection, calling the server functions.

use crate::errors::DashboardError;
use crate::list::RowBackend;
use crate::server::functions::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyBackend;

impl RowBackend for ApiKeyBackend {
    async fn delete_one(&self, id: String) -> Result<(), DashboardError> {
        revoke_api_key_fn(id).await.map_err(DashboardError::from)
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        revoke_api_keys_fn(ids).await.map_err(DashboardError::from)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LnAddressBackend;

impl RowBackend for LnAddressBackend {
    async fn delete_one(&self, id: String) -> Result<(), DashboardError> {
        delete_ln_address_fn(id).await.map_err(DashboardError::from)
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        delete_ln_addresses_fn(ids).await.map_err(DashboardError::from)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceBackend;

impl RowBackend for InvoiceBackend {
    async fn delete_one(&self, id: String) -> Result<(), DashboardError> {
        delete_invoice_fn(id).await.map_err(DashboardError::from)
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        delete_invoices_fn(ids).await.map_err(DashboardError::from)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentBackend;

impl RowBackend for PaymentBackend {
    async fn delete_one(&self, id: String) -> Result<(), DashboardError> {
        delete_payment_fn(id).await.map_err(DashboardError::from)
    }

    async fn delete_many(&self, ids: Vec<String>) -> Result<u64, DashboardError> {
        delete_payments_fn(ids).await.map_err(DashboardError::from)
    }
}

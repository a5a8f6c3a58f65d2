use leptos::prelude::*;

use crate::cache::CacheKey;
use crate::components::format::{format_datetime, format_msat, truncate_middle};
use crate::components::list_view::{badge, ListView, ListViewConfig, ViewActions};
use crate::components::{use_cache_registry, use_toaster, CopyButton, FetchState, QrCode};
use crate::list::records::TransactionColumn;
use crate::list::{ActionLabels, ListController, RowActions, StatusFilter, TableOptions};
use crate::models::{Invoice, InvoiceStatus};
use crate::server::backends::InvoiceBackend;

pub fn invoice_controller() -> RwSignal<ListController<Invoice>> {
    RwSignal::new(ListController::new(TableOptions::new(TransactionColumn::CreatedAt)))
}

fn render_cells(invoice: &Invoice) -> AnyView {
    view! {
        <td class="description">
            {invoice.description.clone().unwrap_or_else(|| "-".to_string())}
        </td>
        <td class="amount">{format_msat(invoice.amount_msat)}</td>
        <td class="amount">{format_msat(invoice.fee_msat)}</td>
        <td>{invoice.ledger.as_str()}</td>
        <td>{badge(invoice.status.as_str())}</td>
        <td class="date">{format_datetime(Some(invoice.created_at))}</td>
        <td class="date">{format_datetime(invoice.payment_time)}</td>
    }
    .into_any()
}

fn render_details(invoice: &Invoice) -> AnyView {
    let bolt11 = invoice.bolt11.clone().unwrap_or_default();
    let has_bolt11 = !bolt11.is_empty();

    view! {
        <div class="row-details__content">
            {has_bolt11.then(|| view! { <QrCode data=bolt11.clone() /> })}
            <div class="row-details__fields">
                <p><strong>"ID: "</strong><code>{invoice.id.clone()}</code></p>
                <p><strong>"Wallet: "</strong><code>{invoice.wallet_id.clone()}</code></p>
                <p>
                    <strong>"Payment Hash: "</strong>
                    <code>{invoice.payment_hash.clone().unwrap_or_else(|| "-".to_string())}</code>
                </p>
                <p>
                    <strong>"Received: "</strong>
                    {format_msat(invoice.amount_received_msat)}
                </p>
                <p><strong>"Expires At (UTC): "</strong>{format_datetime(invoice.expires_at)}</p>
                {has_bolt11.then(|| view! {
                    <p>
                        <strong>"Payment Request: "</strong>
                        <code title=bolt11.clone()>{truncate_middle(&bolt11, 24)}</code>
                        " "
                        <CopyButton value=bolt11.clone() />
                    </p>
                })}
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn InvoiceList(
    controller: RwSignal<ListController<Invoice>>,
    state: RwSignal<FetchState>,
) -> impl IntoView {
    let actions: ViewActions<InvoiceBackend> = RowActions {
        backend: InvoiceBackend,
        notifier: use_toaster(),
        cache: use_cache_registry(),
        key: CacheKey::Invoices,
        labels: ActionLabels::deleted("invoice", "invoices"),
    };

    let config = ListViewConfig {
        title: "Invoices",
        storage_key: "wallet-dashboard.invoices.table",
        placeholder: "Search description, id or payment hash...",
        status_options: vec![
            (StatusFilter::All, "All"),
            (StatusFilter::Only(InvoiceStatus::Pending), "Pending"),
            (StatusFilter::Only(InvoiceStatus::Settled), "Settled"),
            (StatusFilter::Only(InvoiceStatus::Expired), "Expired"),
        ],
        status_label: |status: InvoiceStatus| status.as_str(),
        with_ledgers: true,
        extra_headers: Vec::new(),
        action_label: "Delete",
        render_cells,
        render_details: Some(render_details),
    };

    view! { <ListView controller=controller state=state actions=actions config=config /> }
}

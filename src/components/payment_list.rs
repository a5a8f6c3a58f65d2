use leptos::prelude::*;

use crate::cache::CacheKey;
use crate::components::format::{format_datetime, format_msat};
use crate::components::list_view::{badge, ListView, ListViewConfig, ViewActions};
use crate::components::{use_cache_registry, use_toaster, CopyButton, FetchState};
use crate::list::records::TransactionColumn;
use crate::list::{ActionLabels, ListController, RowActions, StatusFilter, TableOptions};
use crate::models::{Payment, PaymentStatus};
use crate::server::backends::PaymentBackend;

pub fn payment_controller() -> RwSignal<ListController<Payment>> {
    RwSignal::new(ListController::new(TableOptions::new(TransactionColumn::CreatedAt)))
}

fn render_cells(payment: &Payment) -> AnyView {
    let description = payment
        .description
        .clone()
        .or_else(|| payment.ln_address.clone())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <td class="description">{description}</td>
        <td class="amount">{format_msat(Some(payment.amount_msat))}</td>
        <td class="amount">{format_msat(payment.fee_msat)}</td>
        <td>{payment.ledger.as_str()}</td>
        <td>{badge(payment.status.as_str())}</td>
        <td class="date">{format_datetime(Some(payment.created_at))}</td>
        <td class="date">{format_datetime(payment.payment_time)}</td>
    }
    .into_any()
}

fn render_details(payment: &Payment) -> AnyView {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    view! {
        <div class="row-details__content">
            <div class="row-details__fields">
                <p><strong>"ID: "</strong><code>{payment.id.clone()}</code></p>
                <p><strong>"Wallet: "</strong><code>{payment.wallet_id.clone()}</code></p>
                <p><strong>"Lightning Address: "</strong>{or_dash(&payment.ln_address)}</p>
                <p><strong>"Payment Hash: "</strong><code>{or_dash(&payment.payment_hash)}</code></p>
                <p>
                    <strong>"Preimage: "</strong>
                    <code>{or_dash(&payment.payment_preimage)}</code>
                    {payment.payment_preimage.clone().map(|preimage| view! {
                        " "
                        <CopyButton value=preimage />
                    })}
                </p>
                <p><strong>"Failure Reason: "</strong>{or_dash(&payment.error)}</p>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn PaymentList(
    controller: RwSignal<ListController<Payment>>,
    state: RwSignal<FetchState>,
) -> impl IntoView {
    let actions: ViewActions<PaymentBackend> = RowActions {
        backend: PaymentBackend,
        notifier: use_toaster(),
        cache: use_cache_registry(),
        key: CacheKey::Payments,
        labels: ActionLabels::deleted("payment", "payments"),
    };

    let config = ListViewConfig {
        title: "Payments",
        storage_key: "wallet-dashboard.payments.table",
        placeholder: "Search description, address or payment hash...",
        status_options: vec![
            (StatusFilter::All, "All"),
            (StatusFilter::Only(PaymentStatus::Pending), "Pending"),
            (StatusFilter::Only(PaymentStatus::Settled), "Settled"),
            (StatusFilter::Only(PaymentStatus::Failed), "Failed"),
        ],
        status_label: |status: PaymentStatus| status.as_str(),
        with_ledgers: true,
        extra_headers: Vec::new(),
        action_label: "Delete",
        render_cells,
        render_details: Some(render_details),
    };

    view! { <ListView controller=controller state=state actions=actions config=config /> }
}

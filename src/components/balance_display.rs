use crate::cache::{CacheKey, Invalidate};
use crate::components::format::{format_msat, format_signed_msat};
use crate::components::use_cache_registry;
use crate::server::functions::get_balance_fn;
use leptos::prelude::*;

#[component]
fn BalanceItem(
    label: &'static str,
    amount: String,
    #[prop(default = "")] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="balance-item">
            <span class="balance-label">{label}</span>
            <span class=format!("balance-value {tone}")>{amount}</span>
        </div>
    }
}

/// Wallet balance; refetched whenever the balance key is invalidated
/// (deleting invoices or payments does that).
#[component]
pub fn BalanceDisplay() -> impl IntoView {
    let cache = use_cache_registry();

    let balance = LocalResource::new(move || {
        cache.version(CacheKey::Balance);
        get_balance_fn()
    });

    let reload = move |_| cache.invalidate(CacheKey::Balance);

    view! {
        <div class="panel balance-display">
            <h2>"Balance"</h2>

            <Transition fallback=|| view! { <p>"Loading balance..."</p> }>
                {move || Suspend::new(async move {
                    match balance.await {
                        Ok(wallet) => view! {
                            <div class="balance-grid">
                                <BalanceItem
                                    label="Available"
                                    amount=format_signed_msat(wallet.available_msat)
                                    tone="balance-total"
                                />
                                <BalanceItem
                                    label="Received"
                                    amount=format_msat(Some(wallet.received_msat))
                                    tone="balance-received"
                                />
                                <BalanceItem
                                    label="Sent"
                                    amount=format_msat(Some(wallet.sent_msat))
                                    tone="balance-paid"
                                />
                                <BalanceItem
                                    label="Fees paid"
                                    amount=format_msat(Some(wallet.fees_paid_msat))
                                />
                            </div>
                        }
                        .into_any(),
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to load balance");
                            view! {
                                <p class="error-message">"Failed to load balance"</p>
                                <button class="btn btn-secondary btn-inline" type="button" on:click=reload>
                                    "Retry"
                                </button>
                            }
                            .into_any()
                        }
                    }
                })}
            </Transition>
        </div>
    }
}

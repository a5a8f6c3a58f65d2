use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::cache::CacheKey;
use crate::components::*;
use crate::server::functions::{
    list_api_keys_fn, list_invoices_fn, list_ln_addresses_fn, list_payments_fn,
};

/// SSR shell: provides the full HTML document structure for server-side rendering.
/// This is called by `leptos_routes_with_context` in initialize.rs.
#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();
    provide_cache_registry();

    view! {
        <Stylesheet id="leptos" href="/pkg/wallet-dashboard.css"/>
        <Title text="Wallet Dashboard"/>

        <Router>
            <div class="container">
                <header class="app-header">
                    <h1>"⚡ Wallet Dashboard"</h1>
                    <nav class="app-nav">
                        <A href="/">"Transactions"</A>
                        <A href="/ln-addresses">"Lightning addresses"</A>
                        <A href="/api-keys">"API keys"</A>
                    </nav>
                </header>

                <main class="app-main">
                    <Routes fallback=|| view! { <p class="empty-state">"Page not found"</p> }>
                        <Route path=path!("/") view=TransactionsPage/>
                        <Route path=path!("/ln-addresses") view=LnAddressesPage/>
                        <Route path=path!("/api-keys") view=ApiKeysPage/>
                    </Routes>
                </main>
            </div>
            <ToastStack/>
        </Router>
    }
}

/// Balance, invoices and payments. Both lists load in parallel; if either
/// fetch fails the page shows the failure instead of a half-filled view.
#[component]
fn TransactionsPage() -> impl IntoView {
    let invoices = invoice_controller();
    let payments = payment_controller();
    let invoices_state = use_remote_list(CacheKey::Invoices, invoices, list_invoices_fn);
    let payments_state = use_remote_list(CacheKey::Payments, payments, list_payments_fn);

    let error = Signal::derive(move || {
        invoices_state
            .get()
            .error()
            .or_else(|| payments_state.get().error())
    });
    let on_retry = retry(
        use_cache_registry(),
        &[CacheKey::Invoices, CacheKey::Payments, CacheKey::Balance],
    );

    view! {
        <Show
            when=move || error.get().is_none()
            fallback=move || view! { <FailedView error=error on_retry=on_retry /> }
        >
            <div class="top-row">
                <BalanceDisplay/>
            </div>
            <div class="bottom-row">
                <InvoiceList controller=invoices state=invoices_state />
            </div>
            <div class="bottom-row">
                <PaymentList controller=payments state=payments_state />
            </div>
        </Show>
    }
}

#[component]
fn LnAddressesPage() -> impl IntoView {
    let controller = ln_address_controller();
    let state = use_remote_list(CacheKey::LnAddresses, controller, list_ln_addresses_fn);
    let error = Signal::derive(move || state.get().error());
    let on_retry = retry(use_cache_registry(), &[CacheKey::LnAddresses]);

    view! {
        <Show
            when=move || error.get().is_none()
            fallback=move || view! { <FailedView error=error on_retry=on_retry /> }
        >
            <LnAddressList controller=controller state=state />
        </Show>
    }
}

#[component]
fn ApiKeysPage() -> impl IntoView {
    let controller = api_key_controller();
    let state = use_remote_list(CacheKey::ApiKeys, controller, list_api_keys_fn);
    let error = Signal::derive(move || state.get().error());
    let on_retry = retry(use_cache_registry(), &[CacheKey::ApiKeys]);

    view! {
        <Show
            when=move || error.get().is_none()
            fallback=move || view! { <FailedView error=error on_retry=on_retry /> }
        >
            <ApiKeyList controller=controller state=state />
        </Show>
    }
}

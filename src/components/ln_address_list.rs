use leptos::prelude::*;

use crate::cache::CacheKey;
use crate::components::format::{format_datetime, truncate_middle};
use crate::components::list_view::{badge, ListView, ListViewConfig, ViewActions};
use crate::components::{use_cache_registry, use_toaster, FetchState};
use crate::list::records::LnAddressColumn;
use crate::list::{ActionLabels, ListController, ListRecord, RowActions, StatusFilter, TableOptions};
use crate::models::{LnAddress, LnAddressStatus};
use crate::server::backends::LnAddressBackend;

pub fn ln_address_controller() -> RwSignal<ListController<LnAddress>> {
    RwSignal::new(ListController::new(TableOptions::new(LnAddressColumn::CreatedAt)))
}

fn render_cells(address: &LnAddress) -> AnyView {
    let nostr = address
        .allows_nostr
        .then(|| view! { <span class="chip chip-small">"nostr"</span> });

    view! {
        <td>
            <div class="cell-title">{address.username.clone()} {nostr}</div>
            <small class="cell-subtitle">
                {address.nostr_pubkey.as_deref().map(|key| truncate_middle(key, 8)).unwrap_or_default()}
            </small>
        </td>
        <td><code>{truncate_middle(&address.wallet_id, 6)}</code></td>
        <td>{badge(address.status().as_str())}</td>
        <td class="date">{format_datetime(Some(address.created_at))}</td>
        <td class="date">{format_datetime(address.updated_at)}</td>
    }
    .into_any()
}

#[component]
pub fn LnAddressList(
    controller: RwSignal<ListController<LnAddress>>,
    state: RwSignal<FetchState>,
) -> impl IntoView {
    let actions: ViewActions<LnAddressBackend> = RowActions {
        backend: LnAddressBackend,
        notifier: use_toaster(),
        cache: use_cache_registry(),
        key: CacheKey::LnAddresses,
        labels: ActionLabels::deleted("Lightning address", "Lightning addresses"),
    };

    let config = ListViewConfig {
        title: "Lightning addresses",
        storage_key: "wallet-dashboard.ln-addresses.table",
        placeholder: "Search username or wallet...",
        status_options: vec![
            (StatusFilter::All, "All"),
            (StatusFilter::Only(LnAddressStatus::Active), "Active"),
            (StatusFilter::Only(LnAddressStatus::Inactive), "Inactive"),
        ],
        status_label: |status: LnAddressStatus| status.as_str(),
        with_ledgers: false,
        extra_headers: Vec::new(),
        action_label: "Delete",
        render_cells,
        render_details: None,
    };

    view! { <ListView controller=controller state=state actions=actions config=config /> }
}

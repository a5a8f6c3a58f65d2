use leptos::prelude::*;

use crate::cache::CacheKey;
use crate::components::format::format_datetime;
use crate::components::list_view::{badge, ListView, ListViewConfig, ViewActions};
use crate::components::{use_cache_registry, use_toaster, FetchState};
use crate::list::records::ApiKeyColumn;
use crate::list::{ActionLabels, ListController, ListRecord, RowActions, StatusFilter, TableOptions};
use crate::models::{ApiKey, ApiKeyStatus};
use crate::server::backends::ApiKeyBackend;

pub fn api_key_controller() -> RwSignal<ListController<ApiKey>> {
    RwSignal::new(ListController::new(TableOptions::new(ApiKeyColumn::CreatedAt)))
}

fn render_cells(key: &ApiKey) -> AnyView {
    let permissions = key
        .permissions
        .iter()
        .map(|permission| view! { <span class="chip chip-small">{permission.as_str()}</span> })
        .collect_view();

    view! {
        <td>
            <div class="cell-title">{key.name.clone()}</div>
            <small class="cell-subtitle">{key.description.clone().unwrap_or_default()}</small>
        </td>
        <td class="permissions">{permissions}</td>
        <td class="date">{format_datetime(Some(key.created_at))}</td>
        <td class="date">{format_datetime(key.expires_at)}</td>
        <td>{badge(key.status().as_str())}</td>
    }
    .into_any()
}

/// API keys of the account. Deleting a key revokes it.
#[component]
pub fn ApiKeyList(
    controller: RwSignal<ListController<ApiKey>>,
    state: RwSignal<FetchState>,
) -> impl IntoView {
    let actions: ViewActions<ApiKeyBackend> = RowActions {
        backend: ApiKeyBackend,
        notifier: use_toaster(),
        cache: use_cache_registry(),
        key: CacheKey::ApiKeys,
        labels: ActionLabels {
            singular: "API key",
            plural: "API keys",
            done: "revoked",
            verb: "revoke",
        },
    };

    let config = ListViewConfig {
        title: "API keys",
        storage_key: "wallet-dashboard.api-keys.table",
        placeholder: "Search name or id...",
        status_options: vec![
            (StatusFilter::All, "All"),
            (StatusFilter::Only(ApiKeyStatus::Active), "Active"),
            (StatusFilter::Only(ApiKeyStatus::Expired), "Expired"),
        ],
        status_label: |status: ApiKeyStatus| status.as_str(),
        with_ledgers: false,
        extra_headers: vec!["Status"],
        action_label: "Revoke",
        render_cells,
        render_details: None,
    };

    view! { <ListView controller=controller state=state actions=actions config=config /> }
}

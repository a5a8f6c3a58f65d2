use std::future::Future;

use codee::string::JsonSerdeCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::cache::{CacheKey, Invalidate};
use crate::errors::DashboardError;
use crate::list::{ListController, ListHandle, ListRecord, TablePrefs};

/// One version counter per collection. Bumping a counter refetches every
/// resource that read it.
#[derive(Debug, Clone, Copy)]
pub struct CacheRegistry {
    api_keys: RwSignal<u64>,
    ln_addresses: RwSignal<u64>,
    invoices: RwSignal<u64>,
    payments: RwSignal<u64>,
    balance: RwSignal<u64>,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self {
            api_keys: RwSignal::new(0),
            ln_addresses: RwSignal::new(0),
            invoices: RwSignal::new(0),
            payments: RwSignal::new(0),
            balance: RwSignal::new(0),
        }
    }

    fn slot(&self, key: CacheKey) -> RwSignal<u64> {
        match key {
            CacheKey::ApiKeys => self.api_keys,
            CacheKey::LnAddresses => self.ln_addresses,
            CacheKey::Invoices => self.invoices,
            CacheKey::Payments => self.payments,
            CacheKey::Balance => self.balance,
        }
    }

    /// Current version of `key`; tracked.
    pub fn version(&self, key: CacheKey) -> u64 {
        self.slot(key).get()
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Invalidate for CacheRegistry {
    fn invalidate(&self, key: CacheKey) {
        tracing::debug!(key = key.as_str(), "Invalidating cache key");
        self.slot(key).update(|version| *version += 1);
    }
}

pub fn provide_cache_registry() -> CacheRegistry {
    let registry = CacheRegistry::new();
    provide_context(registry);
    registry
}

pub fn use_cache_registry() -> CacheRegistry {
    expect_context::<CacheRegistry>()
}

impl<R> ListHandle<R> for RwSignal<ListController<R>>
where
    R: ListRecord,
    ListController<R>: Send + Sync,
{
    fn with_list<T>(&self, f: impl FnOnce(&mut ListController<R>) -> T) -> Option<T> {
        // None once the owning view is disposed
        self.try_update(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded,
    Failed(DashboardError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<DashboardError> {
        match self {
            FetchState::Failed(err) => Some(err.clone()),
            _ => None,
        }
    }
}

/// Fetches a collection into `controller` and refetches whenever `key` is
/// invalidated.
///
/// A refetch marks the store as reconciling until the snapshot arrives;
/// rows removed locally in the meantime stay removed.
pub fn use_remote_list<R, F, Fut>(
    key: CacheKey,
    controller: RwSignal<ListController<R>>,
    fetcher: F,
) -> RwSignal<FetchState>
where
    R: ListRecord,
    ListController<R>: Send + Sync,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<R>, ServerFnError>> + 'static,
{
    let cache = use_cache_registry();
    let state = RwSignal::new(FetchState::Loading);

    let resource = LocalResource::new(move || {
        cache.version(key);
        let request = fetcher();
        async move { request.await.map_err(DashboardError::from) }
    });

    Effect::new(move |previous: Option<u64>| {
        let version = cache.version(key);
        if previous.is_some() {
            controller.update(|c| c.store.begin_reconcile());
            state.set(FetchState::Loading);
        }
        version
    });

    Effect::new(move |_| {
        let Some(result) = resource.get() else {
            return;
        };

        match controller.try_update(|c| c.finish_fetch(result)) {
            None => {}
            Some(Ok(count)) => {
                tracing::debug!(key = key.as_str(), count, "Fetched collection");
                state.set(FetchState::Loaded);
            }
            Some(Err(err)) => {
                tracing::error!(key = key.as_str(), error = %err, "Failed to fetch collection");
                state.set(FetchState::Failed(err));
            }
        }
    });

    state
}

/// Restores rows-per-page and density from browser storage and returns the
/// setter the table calls when either changes.
pub fn use_table_prefs<R>(
    storage_key: &'static str,
    controller: RwSignal<ListController<R>>,
) -> WriteSignal<TablePrefs>
where
    R: ListRecord,
    ListController<R>: Send + Sync,
{
    let (prefs, set_prefs, _) = use_local_storage::<TablePrefs, JsonSerdeCodec>(storage_key);

    Effect::new(move |_| {
        let prefs = prefs.get();
        controller.update(|c| c.table.apply_prefs(prefs));
    });

    set_prefs
}

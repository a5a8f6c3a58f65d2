mod common;

use common::{at_day, ids, invoice, ln_address};
use wallet_dashboard::errors::DashboardError;
use wallet_dashboard::list::records::{LnAddressColumn, TransactionColumn};
use wallet_dashboard::list::{ListController, ListStore, StatusFilter, SyncState, TableOptions};
use wallet_dashboard::models::{InvoiceStatus, Ledger, LnAddress, LnAddressStatus};

fn addresses() -> Vec<LnAddress> {
    vec![
        ln_address("a1", "alice", true),
        ln_address("a2", "bob", false),
        ln_address("a3", "carol", true),
    ]
}

#[test]
fn test_new_store_is_not_loaded() {
    let store = ListStore::<LnAddress>::default();
    assert!(!store.is_loaded());
    assert!(store.is_empty());
    assert_eq!(store.sync_state(), SyncState::Consistent);
}

#[test]
fn test_local_delete_marks_stale() {
    let mut store = ListStore::new(addresses());

    let removed = store.remove(&["a2".to_string(), "missing".to_string()]);

    assert_eq!(removed, 1);
    assert_eq!(store.len(), 2);
    assert_eq!(store.sync_state(), SyncState::Stale);
}

#[test]
fn test_racing_snapshot_does_not_resurrect_deleted_rows() {
    let mut store = ListStore::new(addresses());
    store.remove(&["a2".to_string()]);
    store.begin_reconcile();
    assert_eq!(store.sync_state(), SyncState::Reconciling);

    // Snapshot taken before the backend processed the delete
    store.apply_snapshot(addresses());

    assert_eq!(ids(store.rows()), vec!["a1", "a3"]);
    assert_eq!(store.sync_state(), SyncState::Consistent);

    // Tombstones only cover one snapshot
    store.apply_snapshot(addresses());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_snapshot_replaces_rows() {
    let mut controller =
        ListController::new(TableOptions::new(LnAddressColumn::Username));
    assert!(!controller.store.is_loaded());

    controller.apply_snapshot(addresses());
    assert_eq!(controller.store.len(), 3);

    controller.apply_snapshot(vec![ln_address("a4", "dave", true)]);
    assert_eq!(ids(controller.store.rows()), vec!["a4"]);
}

#[test]
fn test_snapshot_prunes_selection_and_clamps_page() {
    let mut controller = ListController::with_rows(
        TableOptions {
            rows_per_page: 2,
            ..TableOptions::new(LnAddressColumn::Username)
        },
        addresses(),
    );
    controller.table.on_change_page(1);
    controller.table.on_select_row("a1");
    controller.table.on_select_row("a3");

    controller.apply_snapshot(vec![ln_address("a1", "alice", true)]);

    assert_eq!(controller.table.page, 0);
    assert_eq!(controller.table.selected, vec!["a1".to_string()]);
}

#[test]
fn test_status_counts_ignore_other_filters() {
    let mut controller =
        ListController::with_rows(TableOptions::new(LnAddressColumn::Username), addresses());
    controller.set_keyword("alice".to_string());

    assert_eq!(controller.status_count(StatusFilter::All), 3);
    assert_eq!(
        controller.status_count(StatusFilter::Only(LnAddressStatus::Active)),
        2
    );
    assert_eq!(
        controller.status_count(StatusFilter::Only(LnAddressStatus::Inactive)),
        1
    );
}

#[test]
fn test_every_snapshot_bumps_generation() {
    let mut store = ListStore::<LnAddress>::default();
    assert_eq!(store.generation(), 0);

    store.apply_snapshot(addresses());
    assert_eq!(store.generation(), 1);

    // Same rows again still counts as a new snapshot
    store.apply_snapshot(addresses());
    assert_eq!(store.generation(), 2);

    // Local deletes do not
    store.remove(&["a1".to_string()]);
    assert_eq!(store.generation(), 2);
}

#[test]
fn test_refetched_row_carries_new_contents() {
    let pending = invoice("inv-1", InvoiceStatus::Pending, Ledger::Lightning, at_day(1));
    let mut controller = ListController::with_rows(
        TableOptions::new(TransactionColumn::CreatedAt),
        vec![pending],
    );
    let before = controller.store.generation();

    let mut settled = invoice("inv-1", InvoiceStatus::Settled, Ledger::Lightning, at_day(1));
    settled.payment_time = Some(at_day(2));
    controller.apply_snapshot(vec![settled.clone()]);

    // Same id, new generation: the row key changes with the contents
    assert_ne!(controller.store.generation(), before);
    assert_eq!(controller.page_rows(), vec![settled]);

    controller.set_status(StatusFilter::Only(InvoiceStatus::Settled));
    assert_eq!(controller.page_rows()[0].status, InvoiceStatus::Settled);
}

#[test]
fn test_failed_refetch_leaves_reconciling() {
    let mut controller =
        ListController::with_rows(TableOptions::new(LnAddressColumn::Username), addresses());
    controller.store.remove(&["a2".to_string()]);
    controller.store.begin_reconcile();
    let generation = controller.store.generation();

    let result = controller.finish_fetch(Err(DashboardError::Transport {
        message: "connection refused".to_string(),
    }));

    assert!(result.is_err());
    assert_eq!(controller.store.sync_state(), SyncState::Stale);
    assert_eq!(ids(controller.store.rows()), vec!["a1", "a3"]);
    assert_eq!(controller.store.generation(), generation);

    // The next successful fetch still drops the locally deleted row
    controller.store.begin_reconcile();
    let count = controller.finish_fetch(Ok(addresses()));

    assert_eq!(count, Ok(3));
    assert_eq!(ids(controller.store.rows()), vec!["a1", "a3"]);
    assert_eq!(controller.store.sync_state(), SyncState::Consistent);
}

#[test]
fn test_failed_first_fetch_stays_consistent() {
    let mut controller =
        ListController::<LnAddress>::new(TableOptions::new(LnAddressColumn::Username));

    let result = controller.finish_fetch(Err(DashboardError::Api {
        status: 500,
        reason: "boom".to_string(),
    }));

    assert!(result.is_err());
    assert!(!controller.store.is_loaded());
    assert_eq!(controller.store.sync_state(), SyncState::Consistent);
}

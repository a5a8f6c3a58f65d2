mod common;

use std::cell::RefCell;

use common::{api_key, at_day, ids, invoice, MockBackend, RecordingCache, RecordingNotifier};
use wallet_dashboard::cache::CacheKey;
use wallet_dashboard::list::records::{ApiKeyColumn, TransactionColumn};
use wallet_dashboard::list::{
    ActionLabels, ConfirmDialog, DeleteTarget, DialogState, ListController, RowActions,
    TableOptions,
};
use wallet_dashboard::models::{ApiKey, Invoice, InvoiceStatus, Ledger};
use wallet_dashboard::notify::NotifyLevel;

fn invoice_list() -> RefCell<ListController<Invoice>> {
    let rows = (1..=5)
        .map(|n| invoice(&format!("inv-{n}"), InvoiceStatus::Settled, Ledger::Lightning, at_day(n)))
        .collect();
    RefCell::new(ListController::with_rows(
        TableOptions::new(TransactionColumn::CreatedAt),
        rows,
    ))
}

fn invoice_actions<'a>(
    backend: MockBackend,
    notifier: &'a RecordingNotifier,
    cache: &'a RecordingCache,
) -> RowActions<MockBackend, &'a RecordingNotifier, &'a RecordingCache> {
    RowActions {
        backend,
        notifier,
        cache,
        key: CacheKey::Invoices,
        labels: ActionLabels::deleted("invoice", "invoices"),
    }
}

#[tokio::test]
async fn test_bulk_delete_two_of_five() -> anyhow::Result<()> {
    let list = invoice_list();
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = invoice_actions(MockBackend::default(), &notifier, &cache);

    {
        let mut controller = list.borrow_mut();
        controller.table.on_select_row("inv-2");
        controller.table.on_select_row("inv-4");
    }

    let count = actions.delete_rows::<Invoice, _>(&list).await?;

    assert_eq!(count, 2);
    let controller = list.borrow();
    assert_eq!(controller.store.len(), 3);
    assert!(controller.table.selected.is_empty());
    assert_eq!(ids(controller.store.rows()), vec!["inv-1", "inv-3", "inv-5"]);
    assert_eq!(
        notifier.last(),
        Some((NotifyLevel::Success, "2 invoices deleted successfully".to_string()))
    );

    // One bulk call, not one call per row
    assert_eq!(
        *actions.backend.calls.borrow(),
        vec![vec!["inv-2".to_string(), "inv-4".to_string()]]
    );
    assert_eq!(
        *cache.invalidated.borrow(),
        vec![CacheKey::Invoices, CacheKey::Balance]
    );

    Ok(())
}

#[tokio::test]
async fn test_failed_single_delete_leaves_rows() -> anyhow::Result<()> {
    let list = invoice_list();
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = invoice_actions(MockBackend::failing("invoice is locked"), &notifier, &cache);

    assert!(list.borrow_mut().open_delete_row("inv-3".to_string()));

    let result = actions.confirm::<Invoice, _>(&list).await;

    assert!(matches!(result, Some(Err(_))));
    let controller = list.borrow();
    assert_eq!(controller.store.len(), 5);
    assert_eq!(controller.dialog.state(), &DialogState::Closed);
    assert_eq!(
        notifier.last(),
        Some((
            NotifyLevel::Error,
            "Failed to delete invoice: invoice is locked".to_string()
        ))
    );
    assert!(cache.invalidated.borrow().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_bulk_delete_keeps_selection() -> anyhow::Result<()> {
    let list = invoice_list();
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = invoice_actions(MockBackend::failing("backend down"), &notifier, &cache);

    list.borrow_mut().select_all(true);

    let result = actions.delete_rows::<Invoice, _>(&list).await;

    assert!(result.is_err());
    let controller = list.borrow();
    assert_eq!(controller.store.len(), 5);
    assert_eq!(controller.table.selected.len(), 5);
    assert_eq!(
        notifier.last().map(|(level, _)| level),
        Some(NotifyLevel::Error)
    );

    Ok(())
}

#[tokio::test]
async fn test_confirmed_single_revoke() -> anyhow::Result<()> {
    let created = at_day(1);
    let list: RefCell<ListController<ApiKey>> = RefCell::new(ListController::with_rows(
        TableOptions::new(ApiKeyColumn::Name),
        vec![api_key("k1", "alpha", created), api_key("k2", "beta", created)],
    ));
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = RowActions {
        backend: MockBackend::default(),
        notifier: &notifier,
        cache: &cache,
        key: CacheKey::ApiKeys,
        labels: ActionLabels {
            singular: "API key",
            plural: "API keys",
            done: "revoked",
            verb: "revoke",
        },
    };

    list.borrow_mut().open_delete_row("k1".to_string());
    let result = actions.confirm::<ApiKey, _>(&list).await;

    assert_eq!(result, Some(Ok(1)));
    assert_eq!(ids(list.borrow().store.rows()), vec!["k2"]);
    assert!(!list.borrow().dialog.is_open());
    assert_eq!(
        notifier.last(),
        Some((NotifyLevel::Success, "API key revoked successfully".to_string()))
    );
    assert_eq!(*cache.invalidated.borrow(), vec![CacheKey::ApiKeys]);

    Ok(())
}

#[tokio::test]
async fn test_empty_selection_is_a_no_op() -> anyhow::Result<()> {
    let list = invoice_list();
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = invoice_actions(MockBackend::default(), &notifier, &cache);

    let count = actions.delete_rows::<Invoice, _>(&list).await?;

    assert_eq!(count, 0);
    assert!(actions.backend.calls.borrow().is_empty());
    assert!(notifier.messages.borrow().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_confirm_without_open_dialog() -> anyhow::Result<()> {
    let list = invoice_list();
    let notifier = RecordingNotifier::default();
    let cache = RecordingCache::default();
    let actions = invoice_actions(MockBackend::default(), &notifier, &cache);

    assert!(actions.confirm::<Invoice, _>(&list).await.is_none());
    assert!(actions.backend.calls.borrow().is_empty());

    Ok(())
}

#[test]
fn test_dialog_transitions() {
    let mut dialog = ConfirmDialog::default();
    let target = DeleteTarget::Selected(vec!["a".to_string(), "b".to_string()]);

    assert!(dialog.open(target.clone()));
    // A second open while busy is ignored
    assert!(!dialog.open(DeleteTarget::Single("c".to_string())));
    assert_eq!(dialog.target(), Some(&target));

    assert!(dialog.cancel());
    assert!(!dialog.is_open());

    dialog.open(target.clone());
    assert_eq!(dialog.confirm(), Some(target));
    assert!(dialog.is_deleting());
    // Cancel is not allowed while the request runs
    assert!(!dialog.cancel());

    dialog.finish();
    assert_eq!(dialog.state(), &DialogState::Closed);
    assert_eq!(dialog.confirm(), None);
}

#[test]
fn test_open_delete_selected_needs_selection() {
    let list = invoice_list();
    let mut controller = list.borrow_mut();

    assert!(!controller.open_delete_selected());

    controller.table.on_select_row("inv-1");
    assert!(controller.open_delete_selected());
    assert_eq!(
        controller.dialog.target(),
        Some(&DeleteTarget::Selected(vec!["inv-1".to_string()]))
    );
}

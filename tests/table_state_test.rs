mod common;

use common::{at_day, ids, invoice};
use wallet_dashboard::list::records::TransactionColumn;
use wallet_dashboard::list::{ListController, Order, TableOptions, TablePrefs, TableState};
use wallet_dashboard::models::{Invoice, InvoiceStatus, Ledger};

fn options(rows_per_page: usize) -> TableOptions<TransactionColumn> {
    TableOptions {
        rows_per_page,
        ..TableOptions::new(TransactionColumn::CreatedAt)
    }
}

/// `count` invoices, newest last.
fn invoices(count: u32) -> Vec<Invoice> {
    (1..=count)
        .map(|n| invoice(&format!("inv-{n:02}"), InvoiceStatus::Settled, Ledger::Lightning, at_day(n)))
        .collect()
}

#[test]
fn test_change_rows_per_page_resets_page() {
    let mut table = TableState::new(options(5));
    table.on_change_page(3);

    table.on_change_rows_per_page(10);

    assert_eq!(table.page, 0);
    assert_eq!(table.rows_per_page, 10);
}

#[test]
fn test_sort_toggles_on_same_column() {
    let mut table = TableState::new(options(5));
    assert_eq!(table.order, Order::Desc);

    table.on_sort(TransactionColumn::CreatedAt);
    assert_eq!(table.order, Order::Asc);

    // New column starts ascending
    table.on_sort(TransactionColumn::Amount);
    table.on_sort(TransactionColumn::Fee);
    assert_eq!(table.order_by, TransactionColumn::Fee);
    assert_eq!(table.order, Order::Asc);
}

#[test]
fn test_delete_last_row_on_page_steps_back() {
    let mut controller =
        ListController::with_rows(options(5), invoices(6));
    controller.table.on_sort(TransactionColumn::CreatedAt); // ascending: inv-06 alone on page 1
    controller.table.on_change_page(1);
    assert_eq!(ids(&controller.page_rows()), vec!["inv-06"]);

    controller.remove_row("inv-06");

    assert_eq!(controller.table.page, 0);
    assert_eq!(controller.page_rows().len(), 5);
}

#[test]
fn test_delete_row_keeps_page_when_others_remain() {
    let mut controller = ListController::with_rows(options(5), invoices(7));
    controller.table.on_sort(TransactionColumn::CreatedAt);
    controller.table.on_change_page(1);

    controller.remove_row("inv-06");

    assert_eq!(controller.table.page, 1);
    assert_eq!(ids(&controller.page_rows()), vec!["inv-07"]);
}

#[test]
fn test_delete_row_on_first_page_never_moves() {
    let mut table = TableState::new(options(5));
    table.on_update_page_delete_row(1);
    assert_eq!(table.page, 0);
}

#[test]
fn test_delete_selected_page_steps_back() {
    let mut controller = ListController::with_rows(options(5), invoices(7));
    controller.table.on_sort(TransactionColumn::CreatedAt);
    controller.table.on_change_page(1);

    let removed = controller.remove_rows(&["inv-06".to_string(), "inv-07".to_string()]);

    assert_eq!(removed, 2);
    assert_eq!(controller.table.page, 0);
    assert!(controller.table.selected.is_empty());
}

#[test]
fn test_delete_everything_filtered_goes_to_first_page() {
    let mut table = TableState::new(options(5));
    table.on_change_page(2);
    table.selected = (0..12).map(|n| format!("id-{n}")).collect();

    table.on_update_page_delete_rows(2, 12);

    assert_eq!(table.page, 0);
    assert!(table.selected.is_empty());
}

#[test]
fn test_delete_spanning_pages_lands_on_last_remaining_page() {
    let mut table = TableState::new(options(5));
    table.on_change_page(3);
    table.selected = (0..8).map(|n| format!("id-{n}")).collect();

    // 20 rows, 5 on the current page, 8 selected: 12 remain, 3 pages
    table.on_update_page_delete_rows(5, 20);

    assert_eq!(table.page, 2);
}

#[test]
fn test_select_all_selects_filtered_rows() {
    let mut controller = ListController::with_rows(options(5), invoices(7));
    controller.set_keyword("inv-0".to_string());

    controller.select_all(true);
    assert_eq!(controller.table.selected.len(), 7);

    controller.select_all(false);
    assert!(controller.table.selected.is_empty());
}

#[test]
fn test_filter_change_prunes_selection_and_resets_page() {
    let mut controller = ListController::with_rows(options(5), invoices(7));
    controller.table.on_change_page(1);
    controller.table.on_select_row("inv-01");
    controller.table.on_select_row("inv-02");

    controller.set_keyword("inv-02".to_string());

    assert_eq!(controller.table.page, 0);
    assert_eq!(controller.table.selected, vec!["inv-02".to_string()]);
}

#[test]
fn test_select_row_toggles() {
    let mut table = TableState::new(options(5));
    table.on_select_row("a");
    table.on_select_row("b");
    table.on_select_row("a");

    assert!(!table.is_selected("a"));
    assert!(table.is_selected("b"));
}

#[test]
fn test_empty_rows_fill_last_page() {
    let mut table = TableState::new(options(5));
    assert_eq!(table.empty_rows(7), 0);

    table.on_change_page(1);
    assert_eq!(table.empty_rows(7), 3);
    assert_eq!(table.page_count(7), 2);
}

#[test]
fn test_prefs_round_trip() {
    let mut table = TableState::new(options(25));
    table.apply_prefs(TablePrefs {
        rows_per_page: 10,
        dense: true,
    });

    assert_eq!(
        table.prefs(),
        TablePrefs {
            rows_per_page: 10,
            dense: true
        }
    );

    let json = serde_json::to_string(&table.prefs()).unwrap();
    let restored: TablePrefs = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, table.prefs());
}

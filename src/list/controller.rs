use std::cell::RefCell;

use chrono::{DateTime, Utc};

use super::dialog::{ConfirmDialog, DeleteTarget};
use super::filter::{apply_filter, count_by_status, Filters, StatusFilter};
use super::sort::get_comparator;
use super::store::ListStore;
use super::table::{TableOptions, TableState};
use super::ListRecord;
use crate::errors::DashboardError;
use crate::models::Ledger;

/// Everything one list view tracks: the fetched rows, the filters, the
/// table state and the delete dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R: ListRecord> {
    pub store: ListStore<R>,
    pub filters: Filters<R::Status>,
    pub table: TableState<R::Column>,
    pub dialog: ConfirmDialog,
}

impl<R: ListRecord> ListController<R> {
    pub fn new(options: TableOptions<R::Column>) -> Self {
        Self {
            store: ListStore::default(),
            filters: Filters::default(),
            table: TableState::new(options),
            dialog: ConfirmDialog::default(),
        }
    }

    pub fn with_rows(options: TableOptions<R::Column>, rows: Vec<R>) -> Self {
        Self {
            store: ListStore::new(rows),
            ..Self::new(options)
        }
    }

    /// Sorted and filtered rows, all pages.
    pub fn filtered(&self) -> Vec<R> {
        apply_filter(
            self.store.rows(),
            get_comparator::<R>(self.table.order, self.table.order_by),
            &self.filters,
            self.filters.date_error(),
        )
    }

    pub fn filtered_ids(&self) -> Vec<String> {
        self.filtered().iter().map(|row| row.id().to_string()).collect()
    }

    pub fn page_rows(&self) -> Vec<R> {
        self.table.page_slice(&self.filtered()).to_vec()
    }

    pub fn current_page_len(&self) -> usize {
        self.table.page_slice(&self.filtered()).len()
    }

    /// Filters are active and nothing matched.
    pub fn not_found(&self) -> bool {
        self.store.is_loaded() && self.filtered().is_empty() && self.filters.can_reset()
    }

    pub fn status_count(&self, status: StatusFilter<R::Status>) -> usize {
        count_by_status(self.store.rows(), status)
    }

    pub fn apply_snapshot(&mut self, rows: Vec<R>) {
        self.store.apply_snapshot(rows);
        self.after_rows_changed();
    }

    /// Outcome of a fetch: a snapshot replaces the rows, a failure keeps
    /// them. Returns the number of rows received.
    pub fn finish_fetch(
        &mut self,
        result: Result<Vec<R>, DashboardError>,
    ) -> Result<usize, DashboardError> {
        match result {
            Ok(rows) => {
                let count = rows.len();
                self.apply_snapshot(rows);
                Ok(count)
            }
            Err(err) => {
                self.store.fetch_failed();
                Err(err)
            }
        }
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.filters.keyword = keyword;
        self.after_filter_change();
    }

    pub fn set_status(&mut self, status: StatusFilter<R::Status>) {
        self.filters.status = status;
        self.after_filter_change();
    }

    pub fn toggle_ledger(&mut self, ledger: Ledger) {
        self.filters.toggle_ledger(ledger);
        self.after_filter_change();
    }

    pub fn set_start_date(&mut self, start: Option<DateTime<Utc>>) {
        self.filters.start_date = start;
        self.after_filter_change();
    }

    pub fn set_end_date(&mut self, end: Option<DateTime<Utc>>) {
        self.filters.end_date = end;
        self.after_filter_change();
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.after_filter_change();
    }

    pub fn select_all(&mut self, checked: bool) {
        let ids = self.filtered_ids();
        self.table.on_select_all_rows(checked, ids);
    }

    pub fn open_delete_row(&mut self, id: String) -> bool {
        self.dialog.open(DeleteTarget::Single(id))
    }

    pub fn open_delete_selected(&mut self) -> bool {
        if self.table.selected.is_empty() {
            return false;
        }
        self.dialog
            .open(DeleteTarget::Selected(self.table.selected.clone()))
    }

    /// Drops a row the backend confirmed as deleted and steps back a page
    /// if it was the last one on it.
    pub fn remove_row(&mut self, id: &str) {
        let page_len = self.current_page_len();
        self.store.remove(&[id.to_string()]);
        self.table.on_update_page_delete_row(page_len);
        self.after_rows_changed();
    }

    /// Drops rows the backend confirmed as deleted and clears the selection.
    pub fn remove_rows(&mut self, ids: &[String]) -> usize {
        let page_len = self.current_page_len();
        let total_filtered = self.filtered().len();

        // Page math counts the rows that were deleted, not whatever the
        // user selected while the request was in flight.
        self.table.selected = ids.to_vec();
        self.table.on_update_page_delete_rows(page_len, total_filtered);

        let removed = self.store.remove(ids);
        self.after_rows_changed();
        removed
    }

    fn after_filter_change(&mut self) {
        self.table.on_reset_page();
        self.after_rows_changed();
    }

    fn after_rows_changed(&mut self) {
        let ids = self.filtered_ids();
        self.table.retain_selection(&ids);
        self.table.clamp_page(ids.len());
    }
}

/// Mutable access to a controller that may live behind a reactive cell.
///
/// Row actions hold a handle across the backend call and only borrow the
/// controller before and after it. Returns `None` when the controller is
/// gone (the view was unmounted while the request was in flight).
pub trait ListHandle<R: ListRecord> {
    fn with_list<T>(&self, f: impl FnOnce(&mut ListController<R>) -> T) -> Option<T>;
}

impl<R: ListRecord> ListHandle<R> for RefCell<ListController<R>> {
    fn with_list<T>(&self, f: impl FnOnce(&mut ListController<R>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

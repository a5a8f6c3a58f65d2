use serde::{Deserialize, Serialize};

use super::sort::Order;

pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Initial table configuration for one list view.
#[derive(Debug, Clone, Copy)]
pub struct TableOptions<C> {
    pub order_by: C,
    pub order: Order,
    pub rows_per_page: usize,
    pub dense: bool,
}

impl<C> TableOptions<C> {
    pub fn new(order_by: C) -> Self {
        Self {
            order_by,
            order: Order::Desc,
            rows_per_page: 25,
            dense: false,
        }
    }
}

/// User preferences persisted per list in browser storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePrefs {
    pub rows_per_page: usize,
    pub dense: bool,
}

impl Default for TablePrefs {
    fn default() -> Self {
        Self {
            rows_per_page: 25,
            dense: false,
        }
    }
}

/// Pagination, sort, density and selection of a table, independent of the
/// rows it displays. Pages are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<C> {
    pub page: usize,
    pub rows_per_page: usize,
    pub order_by: C,
    pub order: Order,
    pub dense: bool,
    pub selected: Vec<String>,
}

impl<C: Copy + PartialEq> TableState<C> {
    pub fn new(options: TableOptions<C>) -> Self {
        Self {
            page: 0,
            rows_per_page: options.rows_per_page.max(1),
            order_by: options.order_by,
            order: options.order,
            dense: options.dense,
            selected: Vec::new(),
        }
    }

    pub fn on_sort(&mut self, column: C) {
        if self.order_by == column {
            self.order = self.order.toggled();
        } else {
            self.order_by = column;
            self.order = Order::Asc;
        }
    }

    pub fn on_select_row(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    pub fn on_select_all_rows(&mut self, checked: bool, all_ids: Vec<String>) {
        if checked {
            self.selected = all_ids;
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn on_change_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn on_change_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    pub fn on_change_dense(&mut self, dense: bool) {
        self.dense = dense;
    }

    pub fn on_reset_page(&mut self) {
        self.page = 0;
    }

    pub fn apply_prefs(&mut self, prefs: TablePrefs) {
        self.rows_per_page = prefs.rows_per_page.max(1);
        self.dense = prefs.dense;
    }

    pub fn prefs(&self) -> TablePrefs {
        TablePrefs {
            rows_per_page: self.rows_per_page,
            dense: self.dense,
        }
    }

    /// After a single row was deleted from a page holding
    /// `current_page_row_count` rows.
    pub fn on_update_page_delete_row(&mut self, current_page_row_count: usize) {
        self.selected.clear();

        if self.page > 0 && current_page_row_count < 2 {
            self.page -= 1;
        }
    }

    /// After the current selection was deleted. Must be called before the
    /// selection is cleared by anything else.
    pub fn on_update_page_delete_rows(
        &mut self,
        current_page_row_count: usize,
        total_filtered_count: usize,
    ) {
        let total_selected = self.selected.len();
        self.selected.clear();

        if self.page == 0 {
            return;
        }

        if total_selected == current_page_row_count {
            self.page -= 1;
        } else if total_selected == total_filtered_count {
            self.page = 0;
        } else if total_selected > current_page_row_count {
            let remaining = total_filtered_count.saturating_sub(total_selected);
            self.page = remaining.div_ceil(self.rows_per_page).saturating_sub(1);
        }
    }

    /// Drops selected ids that are no longer in `visible_ids`.
    pub fn retain_selection(&mut self, visible_ids: &[String]) {
        self.selected.retain(|id| visible_ids.contains(id));
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    /// Moves back to the last page when `total` shrank below the current one.
    pub fn clamp_page(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    pub fn page_slice<'a, R>(&self, rows: &'a [R]) -> &'a [R] {
        let start = (self.page * self.rows_per_page).min(rows.len());
        let end = (start + self.rows_per_page).min(rows.len());
        &rows[start..end]
    }

    /// Filler rows keeping the last page the same height as the others.
    pub fn empty_rows(&self, total: usize) -> usize {
        if self.page == 0 {
            return 0;
        }
        ((self.page + 1) * self.rows_per_page).saturating_sub(total)
    }
}

//! Client-side list views: filter, sort and paginate an already fetched
//! collection, and delete rows from it.
//!
//! Nothing here depends on Leptos; the components wrap a
//! [`ListController`] in a signal.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::models::Ledger;

pub mod actions;
pub mod controller;
pub mod dialog;
pub mod filter;
pub mod records;
pub mod sort;
pub mod store;
pub mod table;

pub use actions::{ActionLabels, RowActions, RowBackend};
pub use controller::{ListController, ListHandle};
pub use dialog::{ConfirmDialog, DeleteTarget, DialogState};
pub use filter::{apply_filter, count_by_status, date_error, Filters, StatusFilter};
pub use sort::{get_comparator, stable_sort, Order};
pub use store::{ListStore, SyncState};
pub use table::{TableOptions, TablePrefs, TableState, ROWS_PER_PAGE_OPTIONS};

/// A row of a list view.
pub trait ListRecord: Clone + PartialEq + Debug + 'static {
    /// Sortable columns.
    type Column: Copy + Eq + Debug + 'static;
    /// Values of the status filter.
    type Status: Copy + Eq + Debug + 'static;

    /// Unique within a collection; used as the row key.
    fn id(&self) -> &str;

    /// Fields the keyword filter searches.
    fn keyword_fields(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;

    fn ledger(&self) -> Option<Ledger> {
        None
    }

    /// Timestamp the date range filter applies to.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Ascending order of `self` and `other` on `column`.
    fn compare(&self, other: &Self, column: Self::Column) -> Ordering;
}

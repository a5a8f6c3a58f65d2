use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::sort::stable_sort;
use super::ListRecord;
use crate::models::Ledger;

/// Status filter; `All` is the sentinel that disables the stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq + Copy> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

/// Filter state of one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters<S> {
    pub keyword: String,
    pub status: StatusFilter<S>,
    pub ledgers: Vec<Ledger>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl<S> Default for Filters<S> {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            status: StatusFilter::All,
            ledgers: Vec::new(),
            start_date: None,
            end_date: None,
        }
    }
}

impl<S: PartialEq + Copy> Filters<S> {
    /// True when any filter differs from its default, i.e. the "clear"
    /// action has something to do.
    pub fn can_reset(&self) -> bool {
        !self.keyword.is_empty()
            || !self.status.is_all()
            || !self.ledgers.is_empty()
            || (self.start_date.is_some() && self.end_date.is_some())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn date_error(&self) -> bool {
        date_error(self.start_date, self.end_date)
    }

    pub fn toggle_ledger(&mut self, ledger: Ledger) {
        if let Some(pos) = self.ledgers.iter().position(|l| *l == ledger) {
            self.ledgers.remove(pos);
        } else {
            self.ledgers.push(ledger);
        }
    }
}

/// A range whose start lies after its end.
pub fn date_error(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> bool {
    matches!((start, end), (Some(start), Some(end)) if start > end)
}

pub fn matches_keyword<R: ListRecord>(row: &R, keyword: &str) -> bool {
    if keyword.is_empty() {
        return true;
    }

    let needle = keyword.to_lowercase();
    row.keyword_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_ledger<R: ListRecord>(row: &R, ledgers: &[Ledger]) -> bool {
    if ledgers.is_empty() {
        return true;
    }

    match row.ledger() {
        Some(ledger) => ledgers.contains(&ledger),
        None => false,
    }
}

pub fn within_range(ts: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    start <= ts && ts <= end
}

/// Sort, then filter by keyword, status, ledger and date range.
///
/// The date stage only runs when both bounds are set and `date_error` is
/// false; an inverted range is ignored rather than reported.
pub fn apply_filter<R, F>(
    input: &[R],
    comparator: F,
    filters: &Filters<R::Status>,
    date_error: bool,
) -> Vec<R>
where
    R: ListRecord,
    F: Fn(&R, &R) -> Ordering,
{
    let mut rows = stable_sort(input, comparator);

    if !filters.keyword.is_empty() {
        rows.retain(|row| matches_keyword(row, &filters.keyword));
    }

    if !filters.status.is_all() {
        rows.retain(|row| filters.status.matches(row.status()));
    }

    if !filters.ledgers.is_empty() {
        rows.retain(|row| matches_ledger(row, &filters.ledgers));
    }

    if !date_error {
        if let (Some(start), Some(end)) = (filters.start_date, filters.end_date) {
            rows.retain(|row| within_range(row.timestamp(), start, end));
        }
    }

    rows
}

/// Number of rows per status tab; `All` counts everything.
pub fn count_by_status<R: ListRecord>(rows: &[R], status: StatusFilter<R::Status>) -> usize {
    rows.iter().filter(|row| status.matches(row.status())).count()
}

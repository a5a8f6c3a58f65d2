use std::collections::HashSet;

use super::ListRecord;

/// How the local rows relate to the last snapshot fetched from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    /// Rows equal the last applied snapshot.
    #[default]
    Consistent,
    /// Rows were removed locally after a confirmed delete.
    Stale,
    /// A refetch is in flight.
    Reconciling,
}

/// Local copy of a fetched collection.
///
/// Snapshots replace the rows wholesale. Ids deleted locally since the last
/// consistent snapshot are kept as tombstones and dropped from the next
/// snapshot, so a refetch that raced the delete cannot resurrect them.
///
/// Every snapshot bumps `generation`; views key rendered rows on it so a row
/// whose contents changed under the same id is rendered again.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<R> {
    rows: Vec<R>,
    sync: SyncState,
    tombstones: HashSet<String>,
    loaded: bool,
    generation: u64,
}

impl<R> Default for ListStore<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sync: SyncState::Consistent,
            tombstones: HashSet::new(),
            loaded: false,
            generation: 0,
        }
    }
}

impl<R: ListRecord> ListStore<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            loaded: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin_reconcile(&mut self) {
        self.sync = SyncState::Reconciling;
    }

    /// A refetch failed: the rows are still the local ones and tombstones
    /// stay until a snapshot arrives.
    pub fn fetch_failed(&mut self) {
        if self.sync == SyncState::Reconciling {
            self.sync = SyncState::Stale;
        }
    }

    pub fn apply_snapshot(&mut self, mut rows: Vec<R>) {
        if !self.tombstones.is_empty() {
            rows.retain(|row| !self.tombstones.contains(row.id()));
            self.tombstones.clear();
        }

        self.rows = rows;
        self.loaded = true;
        self.sync = SyncState::Consistent;
        self.generation += 1;
    }

    /// Removes rows whose deletion the backend confirmed. Returns how many
    /// rows were actually present.
    pub fn remove(&mut self, ids: &[String]) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !ids.iter().any(|id| id == row.id()));
        let removed = before - self.rows.len();

        self.tombstones.extend(ids.iter().cloned());
        if self.sync == SyncState::Consistent {
            self.sync = SyncState::Stale;
        }

        removed
    }
}

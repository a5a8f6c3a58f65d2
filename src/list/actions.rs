use std::future::Future;

use super::controller::ListHandle;
use super::dialog::DeleteTarget;
use super::ListRecord;
use crate::cache::{CacheKey, Invalidate};
use crate::errors::DashboardError;
use crate::notify::Notifier;

/// Backend side of the row actions for one collection.
pub trait RowBackend {
    fn delete_one(&self, id: String) -> impl Future<Output = Result<(), DashboardError>>;

    /// Deletes every id in one call and returns how many rows the backend
    /// removed.
    fn delete_many(&self, ids: Vec<String>) -> impl Future<Output = Result<u64, DashboardError>>;
}

/// Wording of the notifications for one collection.
#[derive(Debug, Clone, Copy)]
pub struct ActionLabels {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Past tense shown on success, e.g. "revoked".
    pub done: &'static str,
    /// Infinitive shown on failure, e.g. "revoke".
    pub verb: &'static str,
}

impl ActionLabels {
    pub fn deleted(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            done: "deleted",
            verb: "delete",
        }
    }

    pub fn one_done(&self) -> String {
        format!("{} {} successfully", capitalize(self.singular), self.done)
    }

    pub fn many_done(&self, count: u64) -> String {
        let noun = if count == 1 { self.singular } else { self.plural };
        format!("{count} {noun} {} successfully", self.done)
    }

    pub fn one_failed(&self, err: &DashboardError) -> String {
        format!("Failed to {} {}: {}", self.verb, self.singular, err.reason())
    }

    pub fn many_failed(&self, err: &DashboardError) -> String {
        format!("Failed to {} {}: {}", self.verb, self.plural, err.reason())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Single-row and bulk delete for one list view.
///
/// The backend call comes first; local rows only change after it succeeded,
/// so a failure leaves the list and the selection as they were.
#[derive(Debug, Clone, Copy)]
pub struct RowActions<B, N, C> {
    pub backend: B,
    pub notifier: N,
    pub cache: C,
    pub key: CacheKey,
    pub labels: ActionLabels,
}

impl<B, N, C> RowActions<B, N, C>
where
    B: RowBackend,
    N: Notifier,
    C: Invalidate,
{
    pub async fn delete_row<R, H>(&self, list: &H, id: String) -> Result<(), DashboardError>
    where
        R: ListRecord,
        H: ListHandle<R>,
    {
        tracing::debug!(key = self.key.as_str(), %id, "Deleting row");

        match self.backend.delete_one(id.clone()).await {
            Ok(()) => {
                list.with_list(|c| c.remove_row(&id));
                self.notifier.success(self.labels.one_done());
                self.invalidate();
                Ok(())
            }
            Err(err) => {
                tracing::error!(key = self.key.as_str(), %id, error = %err, "Row delete failed");
                self.notifier.error(self.labels.one_failed(&err));
                Err(err)
            }
        }
    }

    /// Deletes the current selection.
    pub async fn delete_rows<R, H>(&self, list: &H) -> Result<u64, DashboardError>
    where
        R: ListRecord,
        H: ListHandle<R>,
    {
        let ids = list.with_list(|c| c.table.selected.clone()).unwrap_or_default();
        self.delete_ids(list, ids).await
    }

    async fn delete_ids<R, H>(&self, list: &H, ids: Vec<String>) -> Result<u64, DashboardError>
    where
        R: ListRecord,
        H: ListHandle<R>,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        tracing::debug!(key = self.key.as_str(), count = ids.len(), "Deleting rows");

        match self.backend.delete_many(ids.clone()).await {
            Ok(count) => {
                list.with_list(|c| c.remove_rows(&ids));
                self.notifier.success(self.labels.many_done(count));
                self.invalidate();
                Ok(count)
            }
            Err(err) => {
                tracing::error!(key = self.key.as_str(), error = %err, "Bulk delete failed");
                self.notifier.error(self.labels.many_failed(&err));
                Err(err)
            }
        }
    }

    /// Runs the delete the open dialog asked for. The dialog is closed again
    /// once the backend answered, whatever the answer.
    pub async fn confirm<R, H>(&self, list: &H) -> Option<Result<u64, DashboardError>>
    where
        R: ListRecord,
        H: ListHandle<R>,
    {
        let target = list.with_list(|c| c.dialog.confirm()).flatten()?;

        let result = match target {
            DeleteTarget::Single(id) => self.delete_row(list, id).await.map(|()| 1),
            DeleteTarget::Selected(ids) => self.delete_ids(list, ids).await,
        };

        list.with_list(|c| c.dialog.finish());
        Some(result)
    }

    fn invalidate(&self) {
        self.cache.invalidate(self.key);
        for dependent in self.key.dependents() {
            self.cache.invalidate(*dependent);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Single(String),
    Selected(Vec<String>),
}

impl DeleteTarget {
    pub fn len(&self) -> usize {
        match self {
            DeleteTarget::Single(_) => 1,
            DeleteTarget::Selected(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DeleteTarget),
    Deleting(DeleteTarget),
}

/// Confirm-before-delete dialog.
///
/// `Closed -> Open -> Deleting -> Closed`, or `Open -> Closed` on cancel.
/// Completion always closes, whatever the outcome; failures are reported
/// through notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    state: DialogState,
}

impl ConfirmDialog {
    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.state, DialogState::Deleting(_))
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::Open(target) | DialogState::Deleting(target) => Some(target),
        }
    }

    pub fn open(&mut self, target: DeleteTarget) -> bool {
        match self.state {
            DialogState::Closed => {
                self.state = DialogState::Open(target);
                true
            }
            _ => {
                tracing::warn!(state = ?self.state, "Ignoring open on a busy dialog");
                false
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        match self.state {
            DialogState::Open(_) => {
                self.state = DialogState::Closed;
                true
            }
            _ => false,
        }
    }

    /// Moves to `Deleting` and hands out the target to delete.
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        match std::mem::take(&mut self.state) {
            DialogState::Open(target) => {
                self.state = DialogState::Deleting(target.clone());
                Some(target)
            }
            other => {
                tracing::warn!(state = ?other, "Ignoring confirm outside of an open dialog");
                self.state = other;
                None
            }
        }
    }

    pub fn finish(&mut self) {
        if !self.is_deleting() {
            tracing::warn!(state = ?self.state, "Finishing a dialog that was not deleting");
        }
        self.state = DialogState::Closed;
    }
}

//! Exclusive dialog tracking and input blocking.

use super::{DialogId, WindowId, WindowModality};

/// Information about an active modal dialog.
#[derive(Debug, Clone)]
struct ModalEntry {
    dialog_id: DialogId,
    modality: WindowModality,
    owner: Option<WindowId>,
}

/// A stack of shown modal dialogs.
///
/// The most recently shown dialog is on top. Non-modal dialogs are never
/// recorded.
#[derive(Debug, Default)]
pub struct ModalStack {
    entries: Vec<ModalEntry>,
}

impl ModalStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shown dialog. Duplicates and non-modal dialogs are ignored.
    pub fn push(&mut self, dialog_id: DialogId, modality: WindowModality, owner: Option<WindowId>) {
        if !modality.is_modal() || self.entries.iter().any(|e| e.dialog_id == dialog_id) {
            return;
        }
        self.entries.push(ModalEntry {
            dialog_id,
            modality,
            owner,
        });
    }

    /// Remove a dialog. Returns `true` if it was on the stack.
    pub fn remove(&mut self, dialog_id: DialogId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.dialog_id == dialog_id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check whether any modal dialog is shown.
    pub fn has_modal(&self) -> bool {
        !self.entries.is_empty()
    }

    /// The topmost modal dialog.
    pub fn active_modal(&self) -> Option<DialogId> {
        self.entries.last().map(|e| e.dialog_id)
    }

    /// Number of modal dialogs shown.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether input to `window` is blocked.
    ///
    /// An application-modal dialog blocks every window; a window-modal dialog
    /// blocks only its owner.
    pub fn is_blocked(&self, window: WindowId) -> bool {
        self.entries.iter().any(|entry| match entry.modality {
            WindowModality::ApplicationModal => true,
            WindowModality::WindowModal => entry.owner == Some(window),
            WindowModality::NonModal => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn window_ids(n: usize) -> Vec<WindowId> {
        let mut map = SlotMap::<WindowId, ()>::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_no_modal_nothing_blocked() {
        let stack = ModalStack::new();
        let ids = window_ids(1);
        assert!(!stack.is_blocked(ids[0]));
        assert!(!stack.has_modal());
    }

    #[test]
    fn test_application_modal_blocks_all() {
        let mut stack = ModalStack::new();
        let ids = window_ids(2);
        let dialog = DialogId::next();

        stack.push(dialog, WindowModality::ApplicationModal, None);

        assert_eq!(stack.active_modal(), Some(dialog));
        assert!(stack.is_blocked(ids[0]));
        assert!(stack.is_blocked(ids[1]));
    }

    #[test]
    fn test_window_modal_blocks_owner_only() {
        let mut stack = ModalStack::new();
        let ids = window_ids(2);

        stack.push(DialogId::next(), WindowModality::WindowModal, Some(ids[0]));

        assert!(stack.is_blocked(ids[0]));
        assert!(!stack.is_blocked(ids[1]));
    }

    #[test]
    fn test_remove() {
        let mut stack = ModalStack::new();
        let ids = window_ids(1);
        let dialog = DialogId::next();

        stack.push(dialog, WindowModality::WindowModal, Some(ids[0]));
        assert!(stack.remove(dialog));
        assert!(!stack.remove(dialog));
        assert!(!stack.is_blocked(ids[0]));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_non_modal_not_tracked() {
        let mut stack = ModalStack::new();
        stack.push(DialogId::next(), WindowModality::NonModal, None);
        assert!(!stack.has_modal());
    }

    #[test]
    fn test_duplicate_push_ignored() {
        let mut stack = ModalStack::new();
        let dialog = DialogId::next();
        stack.push(dialog, WindowModality::ApplicationModal, None);
        stack.push(dialog, WindowModality::ApplicationModal, None);
        assert_eq!(stack.len(), 1);
    }
}

//! In-process window host.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use savegate_core::logging::targets;
use slotmap::SlotMap;

use super::modal::ModalStack;
use super::{DialogId, OwnerWindow, WindowHost, WindowId, WindowModality};
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size};

/// Who holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Nothing,
    Window(WindowId),
    Dialog(DialogId),
}

/// A [`WindowHost`] that keeps windows, focus and modality in memory.
///
/// Focus changes emit [`OwnerWindow::focus_entered`] after every internal lock
/// has been released, so slots may call back into the manager. When a focused
/// dialog hides, focus returns to the window it was shown over.
pub struct WindowManager {
    screen: Rect,
    windows: Mutex<SlotMap<WindowId, Arc<OwnerWindow>>>,
    focus: Mutex<Focus>,
    modal: Mutex<ModalStack>,
    /// Shown dialogs and the window each was centered over.
    shown: Mutex<HashMap<DialogId, Option<WindowId>>>,
}

impl fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowManager")
            .field("screen", &self.screen)
            .field("windows", &self.windows.lock().len())
            .field("focus", &*self.focus.lock())
            .field("modal", &*self.modal.lock())
            .field("shown", &self.shown.lock().len())
            .finish()
    }
}

impl WindowManager {
    /// Create a host for a screen of the given size.
    pub fn new(screen: Size) -> Self {
        Self {
            screen: Rect::from_origin_size(Default::default(), screen),
            windows: Mutex::new(SlotMap::with_key()),
            focus: Mutex::new(Focus::Nothing),
            modal: Mutex::new(ModalStack::new()),
            shown: Mutex::new(HashMap::new()),
        }
    }

    /// The screen rectangle.
    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Create a visible, unfocused owner window.
    pub fn create_window(&self, title: impl Into<String>, geometry: Rect) -> Arc<OwnerWindow> {
        let title = title.into();
        let window = {
            let mut windows = self.windows.lock();
            let id = windows.insert_with_key(|id| Arc::new(OwnerWindow::new(id, title, geometry)));
            windows[id].clone()
        };
        tracing::debug!(target: targets::FOCUS, window = ?window.id(), title = window.title(), "window created");
        window
    }

    /// Look up a window by ID.
    pub fn window(&self, id: WindowId) -> Option<Arc<OwnerWindow>> {
        self.windows.lock().get(id).cloned()
    }

    /// Number of open windows.
    pub fn window_count(&self) -> usize {
        self.windows.lock().len()
    }

    /// Hide and forget a window. Drops focus if the window had it.
    pub fn close_window(&self, id: WindowId) -> Result<()> {
        let window = self.windows.lock().remove(id).ok_or(Error::UnknownWindow(id))?;
        window.set_visible(false);

        let mut focus = self.focus.lock();
        if *focus == Focus::Window(id) {
            *focus = Focus::Nothing;
        }
        tracing::debug!(target: targets::FOCUS, window = ?id, "window closed");
        Ok(())
    }

    /// The focused owner window, if an owner window has focus.
    pub fn focused_window(&self) -> Option<Arc<OwnerWindow>> {
        match *self.focus.lock() {
            Focus::Window(id) => self.window(id),
            _ => None,
        }
    }

    /// The focused dialog, if a dialog has focus.
    pub fn focused_dialog(&self) -> Option<DialogId> {
        match *self.focus.lock() {
            Focus::Dialog(id) => Some(id),
            _ => None,
        }
    }

    /// Give keyboard focus to an owner window.
    ///
    /// Fails with [`Error::WindowBlocked`] while an exclusive dialog blocks
    /// the window. Emits `focus_entered` only when focus actually moves.
    pub fn focus_window(&self, id: WindowId) -> Result<()> {
        let window = self.window(id).ok_or(Error::UnknownWindow(id))?;

        if self.modal.lock().is_blocked(id) {
            tracing::debug!(target: targets::FOCUS, window = ?id, "focus request refused: window blocked");
            return Err(Error::WindowBlocked(id));
        }

        let changed = {
            let mut focus = self.focus.lock();
            let changed = *focus != Focus::Window(id);
            *focus = Focus::Window(id);
            changed
        };

        if changed {
            tracing::debug!(target: targets::FOCUS, window = ?id, "window focused");
            window.focus_entered.emit(());
        }
        Ok(())
    }

    /// Check whether input to a window is blocked by a modal dialog.
    pub fn is_blocked(&self, id: WindowId) -> bool {
        self.modal.lock().is_blocked(id)
    }

    /// The topmost modal dialog.
    pub fn active_modal(&self) -> Option<DialogId> {
        self.modal.lock().active_modal()
    }

    /// Number of modal dialogs currently shown.
    pub fn modal_count(&self) -> usize {
        self.modal.lock().len()
    }
}

impl WindowHost for WindowManager {
    /// The focused window, or the owner of the focused dialog.
    fn visible_parent_window(&self) -> Option<Arc<OwnerWindow>> {
        let id = match *self.focus.lock() {
            Focus::Window(id) => Some(id),
            Focus::Dialog(dialog) => self.shown.lock().get(&dialog).copied().flatten(),
            Focus::Nothing => None,
        };
        id.and_then(|id| self.window(id))
            .filter(|window| window.is_visible())
    }

    fn popup_centered(
        &self,
        dialog: DialogId,
        parent: Option<&OwnerWindow>,
        size: Size,
        modality: WindowModality,
    ) -> Rect {
        let anchor = parent.map_or(self.screen, OwnerWindow::geometry);
        let rect = anchor.centered(size);

        let owner = parent.map(OwnerWindow::id);
        self.modal.lock().push(dialog, modality, owner);
        self.shown.lock().insert(dialog, owner);
        *self.focus.lock() = Focus::Dialog(dialog);

        tracing::debug!(target: targets::FOCUS, dialog = dialog.as_u64(), ?modality, ?rect, "dialog shown");
        rect
    }

    fn dialog_hidden(&self, dialog: DialogId) {
        let was_modal = self.modal.lock().remove(dialog);
        let owner = self.shown.lock().remove(&dialog).flatten();

        let restored = {
            let mut focus = self.focus.lock();
            if *focus == Focus::Dialog(dialog) {
                let window = owner
                    .and_then(|id| self.window(id))
                    .filter(|window| window.is_visible());
                *focus = window.as_ref().map_or(Focus::Nothing, |w| Focus::Window(w.id()));
                window
            } else {
                None
            }
        };
        tracing::debug!(target: targets::FOCUS, dialog = dialog.as_u64(), was_modal, "dialog hidden");

        if let Some(window) = restored {
            tracing::debug!(target: targets::FOCUS, window = ?window.id(), "focus returned to owner");
            window.focus_entered.emit(());
        }
    }
}

static_assertions::assert_impl_all!(WindowManager: Send, Sync);

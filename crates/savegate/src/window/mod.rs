//! The owner-window and focus boundary.
//!
//! The dialog never talks to a windowing system directly. It needs four
//! things from its host, expressed by [`WindowHost`]:
//!
//! - the window that is currently visible and focused (the dialog's owner),
//! - that owner's "focus gained" notification ([`OwnerWindow::focus_entered`]),
//! - centered, focused presentation with the requested [`WindowModality`],
//! - a notification when the dialog hides so input blocking is lifted.
//!
//! Escape and close requests reach the dialog as
//! [`DialogEvent`](crate::event::DialogEvent)s routed by the host.
//!
//! [`WindowManager`] is an in-process host used when no native host exists
//! and throughout the tests.

mod manager;
mod modal;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use savegate_core::Signal;
use slotmap::new_key_type;

use crate::geometry::{Rect, Size};

pub use manager::WindowManager;
pub use modal::ModalStack;

new_key_type! {
    /// Identifies an owner window within its host.
    pub struct WindowId;
}

/// Identifies a dialog to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(u64);

static NEXT_DIALOG_ID: AtomicU64 = AtomicU64::new(1);

impl DialogId {
    /// Allocate a process-unique dialog ID.
    pub fn next() -> Self {
        Self(NEXT_DIALOG_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value of this ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// How a shown dialog restricts input to other windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowModality {
    /// The dialog does not block any window.
    #[default]
    NonModal,
    /// The dialog blocks its owner window only.
    WindowModal,
    /// The dialog blocks every window of the host.
    ApplicationModal,
}

impl WindowModality {
    /// Check if the dialog blocks anything.
    pub fn is_modal(&self) -> bool {
        !matches!(self, WindowModality::NonModal)
    }
}

/// A top-level window that can own a dialog.
///
/// The dialog keeps only a weak reference to its owner, so an owner can be
/// closed and dropped while a dialog is still linked to it.
pub struct OwnerWindow {
    id: WindowId,
    title: String,
    geometry: Mutex<Rect>,
    visible: AtomicBool,

    /// Emitted when this window gains keyboard focus.
    pub focus_entered: Signal<()>,
}

impl fmt::Debug for OwnerWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerWindow")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("geometry", &*self.geometry.lock())
            .field("visible", &self.is_visible())
            .finish()
    }
}

impl OwnerWindow {
    pub(crate) fn new(id: WindowId, title: impl Into<String>, geometry: Rect) -> Self {
        Self {
            id,
            title: title.into(),
            geometry: Mutex::new(geometry),
            visible: AtomicBool::new(true),
            focus_entered: Signal::new(),
        }
    }

    /// The window's ID within its host.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The window title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The window's screen geometry.
    pub fn geometry(&self) -> Rect {
        *self.geometry.lock()
    }

    /// Move or resize the window.
    pub fn set_geometry(&self, geometry: Rect) {
        *self.geometry.lock() = geometry;
    }

    /// Whether the window is shown.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

/// What the dialog requires of the windowing and focus system.
pub trait WindowHost: Send + Sync {
    /// The window that is currently visible and focused, if any.
    fn visible_parent_window(&self) -> Option<Arc<OwnerWindow>>;

    /// Show `dialog` with `size` centered over `parent` (or the screen), give
    /// it keyboard focus and apply `modality`. Returns the dialog's screen rect.
    fn popup_centered(
        &self,
        dialog: DialogId,
        parent: Option<&OwnerWindow>,
        size: Size,
        modality: WindowModality,
    ) -> Rect;

    /// The dialog was hidden or destroyed: lift its input blocking and drop
    /// its focus. Must be a no-op for a dialog the host does not know about.
    fn dialog_hidden(&self, dialog: DialogId);
}

static_assertions::assert_impl_all!(OwnerWindow: Send, Sync);

//! Items offered for saving.

use crate::widget::IconHandle;

/// What kind of unsaved item a row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A standalone resource file.
    Resource,
    /// A script.
    Script,
    /// A scene.
    Scene,
}

/// One unsaved item.
///
/// Items are immutable once handed to
/// [`SaveConfirmationDialog::present`](super::SaveConfirmationDialog::present);
/// row `i` of the dialog's list always shows item `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingItem {
    pub kind: ItemKind,
    /// Path shown as the row text and forwarded on activation.
    pub path: String,
    pub icon: Option<IconHandle>,
}

impl PendingItem {
    /// Create an item without an icon.
    pub fn new(kind: ItemKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            icon: None,
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Shorthand for a [`ItemKind::Resource`] item.
    pub fn resource(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Resource, path)
    }

    /// Shorthand for a [`ItemKind::Script`] item.
    pub fn script(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Script, path)
    }

    /// Shorthand for a [`ItemKind::Scene`] item.
    pub fn scene(path: impl Into<String>) -> Self {
        Self::new(ItemKind::Scene, path)
    }
}

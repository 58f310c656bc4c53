//! Input routed to the dialog by its host.

use crate::geometry::{Point, Size};
use crate::theme::Theme;

/// Keys the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    /// Any other printable key.
    Character(char),
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Only Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };

    /// Only Ctrl (Cmd on macOS) held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
}

/// A key press delivered to the dialog window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Whether this press is an auto-repeat of a held key.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// A fresh (non-repeat) press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            is_repeat: false,
        }
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the press as an auto-repeat.
    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }
}

/// Window-level notifications the host forwards to the dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    /// A key was pressed while the dialog had focus.
    KeyPress(KeyPressEvent),
    /// A mouse button went down at `position` (dialog coordinates).
    MouseDown {
        position: Point,
        modifiers: Modifiers,
        /// Whether this press completes a double-click.
        double_click: bool,
    },
    /// The user asked the window manager to close the dialog window.
    CloseRequested,
    /// The dialog window was resized.
    Resized(Size),
    /// The active theme changed.
    ThemeChanged(Theme),
}

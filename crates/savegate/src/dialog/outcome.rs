//! Dialog outcomes.

use std::fmt;

use crate::widget::DialogButton;

/// The terminal result of one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Save the selected items, then proceed.
    SaveAndClose,
    /// Abort the guarded action.
    Cancelled,
    /// Discard changes and proceed.
    DontSave,
}

impl Outcome {
    /// Whether the guarded action should go ahead.
    pub fn proceeds(self) -> bool {
        !matches!(self, Outcome::Cancelled)
    }
}

impl From<DialogButton> for Outcome {
    fn from(button: DialogButton) -> Self {
        match button {
            DialogButton::SaveAndClose => Outcome::SaveAndClose,
            DialogButton::Cancel => Outcome::Cancelled,
            DialogButton::DontSave => Outcome::DontSave,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::SaveAndClose => "save and close",
            Outcome::Cancelled => "cancelled",
            Outcome::DontSave => "don't save",
        })
    }
}

/// Why a presentation was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The Cancel button was activated.
    Button,
    /// Escape was pressed.
    Escape,
    /// The window manager asked the dialog window to close.
    CloseRequest,
    /// The owner window regained focus while the dialog was non-exclusive.
    OwnerFocused,
}

//! Prelude module for Savegate.
//!
//! ```ignore
//! use savegate::prelude::*;
//! ```

// ============================================================================
// Core
// ============================================================================

pub use savegate_core::{EventLoop, Signal};

// ============================================================================
// Dialog
// ============================================================================

pub use crate::config::DialogConfig;
pub use crate::dialog::{ItemKind, Outcome, PendingItem, SaveConfirmationDialog};
pub use crate::widget::{DialogButton, IconHandle};

// ============================================================================
// Input and Windows
// ============================================================================

pub use crate::event::{DialogEvent, Key, KeyPressEvent, Modifiers};
pub use crate::window::{OwnerWindow, WindowHost, WindowManager};

// ============================================================================
// Geometry and Theme
// ============================================================================

pub use crate::geometry::{Point, Rect, Size};
pub use crate::theme::{Theme, ThemeMode};

//! Savegate - a modal "save before closing?" dialog.
//!
//! Before an action that would lose unsaved work (closing an editor, switching
//! projects) the application presents the pending items in a
//! [`SaveConfirmationDialog`]. The user picks which items to keep and answers
//! with exactly one [`Outcome`]: save the selection and proceed, discard and
//! proceed, or cancel. The application performs the actual saving.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use savegate::prelude::*;
//!
//! let event_loop = EventLoop::new();
//! let windows = Arc::new(WindowManager::new(Size::new(1280.0, 800.0)));
//! let editor = windows.create_window("Editor", Rect::new(0.0, 0.0, 1280.0, 800.0));
//! windows.focus_window(editor.id()).unwrap();
//!
//! let dialog = SaveConfirmationDialog::new(windows.clone(), event_loop.clone());
//! dialog.present(vec![
//!     PendingItem::scene("res://level.tscn"),
//!     PendingItem::script("res://player.gd"),
//! ]);
//!
//! dialog.handle_event(&DialogEvent::KeyPress(KeyPressEvent::new(Key::Escape)));
//! assert_eq!(dialog.last_outcome(), Some(Outcome::Cancelled));
//!
//! // The hide itself runs on the next loop turn.
//! assert!(dialog.is_visible());
//! event_loop.run_until_idle();
//! assert!(!dialog.is_visible());
//! ```

pub mod config;
pub mod dialog;
pub mod error;
pub mod event;
pub mod geometry;
pub mod prelude;
pub mod theme;
pub mod widget;
pub mod window;

pub use savegate_core::{ConnectionId, EventLoop, Signal, TaskId, logging};

pub use config::DialogConfig;
pub use dialog::{
    CancelReason, ChildId, DialogLayout, DialogSignals, ItemKind, Outcome, PendingItem,
    SaveConfirmationDialog, WeakDialog,
};
pub use error::{Error, Result};

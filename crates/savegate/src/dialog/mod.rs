//! The save-confirmation dialog.
//!
//! - [`SaveConfirmationDialog`]: the modal controller. It owns the presented
//!   items, tracks the window it was opened over, and resolves every
//!   presentation to exactly one [`Outcome`].
//! - [`DialogLayout`]: the layout engine. It computes the minimum content size
//!   and places the label, item list, button row and background panel.
//!
//! # Lifecycle
//!
//! ```text
//!            present(items)
//!   Hidden ------------------> Visible
//!     ^                         |  |
//!     |  Save & Close,          |  |  Cancel, Escape, close request,
//!     |  Don't Save (sync)      |  |  owner focused (non-exclusive)
//!     +-------------------------+  v
//!     |                         Closing  -- `cancelled` fires here
//!     +---- next loop turn ------+
//! ```
//!
//! Removing the dialog ([`SaveConfirmationDialog::exit_tree`]) returns to
//! `Hidden` from any state without an outcome.

mod item;
mod layout;
mod outcome;
mod save_confirmation;

pub use item::{ItemKind, PendingItem};
pub use layout::{ChildId, DialogLayout};
pub use outcome::{CancelReason, Outcome};
pub use save_confirmation::{DialogSignals, SaveConfirmationDialog, WeakDialog};

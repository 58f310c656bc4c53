//! Widget primitives used by the dialog.
//!
//! These are deliberately small: each knows its minimum size, where it has
//! been placed, and the little state the dialog reads back (selection, focus).
//! They do no painting and emit no signals; the dialog is the only thing that
//! drives them and it reports changes through its own signals.
//!
//! Widgets embed a [`WidgetBase`] and implement [`Widget`] by delegating to it:
//!
//! ```
//! use savegate::geometry::Size;
//! use savegate::widget::{Widget, WidgetBase};
//!
//! #[derive(Debug, Default)]
//! struct Swatch {
//!     base: WidgetBase,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn intrinsic_minimum_size(&self) -> Size {
//!         Size::new(24.0, 24.0)
//!     }
//! }
//! ```

mod base;
mod button;
mod item_list;
mod label;
mod panel;

use std::fmt;

use crate::geometry::{Rect, Size};
use crate::theme::Theme;

pub use base::WidgetBase;
pub use button::{Button, ButtonRow, DialogButton};
pub use item_list::{IconHandle, ItemList, ListItem, ListPick, SelectMode};
pub use label::Label;
pub use panel::Panel;

/// The interface the dialog layout needs from a child.
pub trait Widget: fmt::Debug + Send {
    /// Get the shared widget state.
    fn widget_base(&self) -> &WidgetBase;

    /// Get the shared widget state mutably.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The smallest size the widget's content fits in.
    fn intrinsic_minimum_size(&self) -> Size {
        Size::ZERO
    }

    /// The combined minimum size: the intrinsic minimum expanded to the
    /// custom minimum set on the widget.
    fn minimum_size(&self) -> Size {
        self.intrinsic_minimum_size()
            .max(self.widget_base().custom_minimum_size())
    }

    /// The widget's rectangle within the dialog.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Place the widget. Returns `true` if the rectangle changed.
    fn set_geometry(&mut self, rect: Rect) -> bool {
        self.widget_base_mut().set_geometry(rect)
    }

    /// Whether the widget positions itself (floating overlays) and must be
    /// skipped by the dialog layout.
    fn is_top_level(&self) -> bool {
        self.widget_base().is_top_level()
    }

    /// React to a theme change.
    fn apply_theme(&mut self, _theme: &Theme) {}
}

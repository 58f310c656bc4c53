//! Shared widget state.

use crate::geometry::{Rect, Size};

/// State every widget carries.
///
/// Widget implementations include this as a field and delegate the
/// [`Widget`](super::Widget) accessors to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetBase {
    /// Position relative to the dialog and size.
    geometry: Rect,
    /// Minimum size requested by the owner, on top of the content minimum.
    custom_minimum_size: Size,
    /// Skipped by the dialog layout when set.
    top_level: bool,
    /// Whether the widget has keyboard focus.
    focused: bool,
}

impl WidgetBase {
    /// Create a widget base at the origin with zero size.
    pub fn new() -> Self {
        Self::default()
    }

    /// The widget's rectangle.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's rectangle. Returns `true` if it changed.
    pub fn set_geometry(&mut self, rect: Rect) -> bool {
        if self.geometry == rect {
            return false;
        }
        self.geometry = rect;
        true
    }

    /// The custom minimum size.
    #[inline]
    pub fn custom_minimum_size(&self) -> Size {
        self.custom_minimum_size
    }

    /// Set the custom minimum size.
    pub fn set_custom_minimum_size(&mut self, size: Size) {
        self.custom_minimum_size = size.non_negative();
    }

    /// Whether the widget is independently positioned.
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.top_level
    }

    /// Mark the widget as independently positioned.
    pub fn set_top_level(&mut self, top_level: bool) {
        self.top_level = top_level;
    }

    /// Whether the widget has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_geometry_reports_change() {
        let mut base = WidgetBase::new();
        let rect = Rect::new(8.0, 8.0, 100.0, 20.0);
        assert!(base.set_geometry(rect));
        assert!(!base.set_geometry(rect));
        assert_eq!(base.geometry(), rect);
    }

    #[test]
    fn test_custom_minimum_size_clamps_negative() {
        let mut base = WidgetBase::new();
        base.set_custom_minimum_size(Size::new(-10.0, 200.0));
        assert_eq!(base.custom_minimum_size(), Size::new(0.0, 200.0));
    }
}

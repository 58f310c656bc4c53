//! Single- or multi-line text label.

use crate::geometry::Size;
use crate::theme::{FontMetrics, Theme};

use super::{Widget, WidgetBase};

/// A non-interactive text label.
#[derive(Debug, Clone)]
pub struct Label {
    base: WidgetBase,
    text: String,
    font: FontMetrics,
}

impl Label {
    /// Create a label with the given text, measured with the default theme.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            font: Theme::default().font,
        }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the label has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Empty text still reserves one line of height here; the dialog layout
    /// decides whether to collapse it.
    fn intrinsic_minimum_size(&self) -> Size {
        let (width, height) = self.font.measure(&self.text);
        Size::new(width, height)
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.font = theme.font;
    }
}

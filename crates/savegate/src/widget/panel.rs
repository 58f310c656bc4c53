//! Plain styled panel.

use crate::geometry::Size;
use crate::theme::{PanelStyle, Theme};

use super::{Widget, WidgetBase};

/// A rectangle filled with a [`PanelStyle`].
///
/// The dialog uses one as its background. Panels with a custom minimum size
/// also serve as generic content children.
#[derive(Debug, Clone)]
pub struct Panel {
    base: WidgetBase,
    style: PanelStyle,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Create a panel styled by the default theme.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            style: Theme::default().panel,
        }
    }

    /// Set the custom minimum size using builder pattern.
    pub fn with_minimum_size(mut self, size: Size) -> Self {
        self.base.set_custom_minimum_size(size);
        self
    }

    /// Mark the panel as independently positioned using builder pattern.
    pub fn top_level(mut self) -> Self {
        self.base.set_top_level(true);
        self
    }

    /// The current style.
    pub fn style(&self) -> PanelStyle {
        self.style
    }

    /// Override the style.
    pub fn set_style(&mut self, style: PanelStyle) {
        self.style = style;
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn intrinsic_minimum_size(&self) -> Size {
        let border = self.style.border_width * 2.0;
        Size::new(border, border)
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.style = theme.panel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_minimum_is_border() {
        let panel = Panel::new();
        assert_eq!(panel.minimum_size(), Size::new(2.0, 2.0));
    }

    #[test]
    fn test_custom_minimum_wins() {
        let panel = Panel::new().with_minimum_size(Size::new(50.0, 1.0));
        assert_eq!(panel.minimum_size(), Size::new(50.0, 2.0));
    }

    #[test]
    fn test_apply_theme_restyles() {
        let mut panel = Panel::new();
        let theme = Theme::high_contrast();
        panel.apply_theme(&theme);
        assert_eq!(panel.style(), theme.panel);
        assert_eq!(panel.minimum_size(), Size::new(4.0, 4.0));
    }
}

//! Push buttons and the dialog's three-button row.

use crate::geometry::{Rect, Size};
use crate::theme::{FontMetrics, Theme};

use super::{Widget, WidgetBase};

/// The buttons of the save-confirmation dialog, in row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogButton {
    /// Save the selected items, then close.
    SaveAndClose,
    /// Abort the close.
    Cancel,
    /// Close without saving.
    DontSave,
}

impl DialogButton {
    /// All buttons, left to right.
    pub const ALL: [DialogButton; 3] = [Self::SaveAndClose, Self::Cancel, Self::DontSave];

    fn index(self) -> usize {
        match self {
            Self::SaveAndClose => 0,
            Self::Cancel => 1,
            Self::DontSave => 2,
        }
    }

    /// The button to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The button to the left, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A text push button.
#[derive(Debug, Clone)]
pub struct Button {
    base: WidgetBase,
    text: String,
    font: FontMetrics,
    padding_h: f32,
    padding_v: f32,
}

impl Button {
    /// Create a button sized by the default theme.
    pub fn new(text: impl Into<String>) -> Self {
        let theme = Theme::default();
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            font: theme.font,
            padding_h: theme.button_padding_h,
            padding_v: theme.button_padding_v,
        }
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the caption.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the button has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.base.has_focus()
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn intrinsic_minimum_size(&self) -> Size {
        let (width, height) = self.font.measure(&self.text);
        Size::new(
            width + self.padding_h * 2.0,
            height + self.padding_v * 2.0,
        )
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.font = theme.font;
        self.padding_h = theme.button_padding_h;
        self.padding_v = theme.button_padding_v;
    }
}

// ============================================================================
// ButtonRow
// ============================================================================

/// Number of stretchable spacers around and between the three buttons.
const SPACERS: usize = 4;

/// A horizontal row of `spacer, Save & Close, spacer, Cancel, spacer,
/// Don't Save, spacer`.
///
/// Adjacent children are separated by the theme separation. Width beyond the
/// minimum goes to the spacers in equal shares; buttons keep their minimum
/// width and take the full row height.
#[derive(Debug, Clone)]
pub struct ButtonRow {
    base: WidgetBase,
    buttons: [Button; 3],
    separation: f32,
    focused: Option<DialogButton>,
}

impl ButtonRow {
    /// Create the row with the given captions.
    pub fn new(save: &str, cancel: &str, dont_save: &str) -> Self {
        Self {
            base: WidgetBase::new(),
            buttons: [Button::new(save), Button::new(cancel), Button::new(dont_save)],
            separation: Theme::default().separation,
            focused: None,
        }
    }

    /// Access one of the buttons.
    pub fn button(&self, which: DialogButton) -> &Button {
        &self.buttons[which.index()]
    }

    /// Access one of the buttons mutably.
    pub fn button_mut(&mut self, which: DialogButton) -> &mut Button {
        &mut self.buttons[which.index()]
    }

    /// The button with keyboard focus.
    pub fn focused(&self) -> Option<DialogButton> {
        self.focused
    }

    /// Move keyboard focus to a button, or clear it.
    pub fn set_focused(&mut self, which: Option<DialogButton>) {
        self.focused = which;
        for button in DialogButton::ALL {
            self.buttons[button.index()]
                .base
                .set_focused(Some(button) == which);
        }
    }

    /// Number of gaps between the seven row children.
    fn gaps(&self) -> f32 {
        (SPACERS + self.buttons.len() - 1) as f32 * self.separation
    }

    fn arrange(&mut self) {
        let rect = self.base.geometry();
        let natural: f32 = self.buttons.iter().map(|b| b.minimum_size().width).sum();
        let extra = (rect.width() - natural - self.gaps()).max(0.0);
        let spacer = extra / SPACERS as f32;

        let mut x = rect.left() + spacer + self.separation;
        for button in &mut self.buttons {
            let width = button.minimum_size().width;
            button.set_geometry(Rect::new(x, rect.top(), width, rect.height()));
            x += width + self.separation + spacer + self.separation;
        }
    }
}

impl Widget for ButtonRow {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn intrinsic_minimum_size(&self) -> Size {
        let mut size = Size::new(self.gaps(), 0.0);
        for button in &self.buttons {
            let min = button.minimum_size();
            size.width += min.width;
            size.height = size.height.max(min.height);
        }
        size
    }

    fn set_geometry(&mut self, rect: Rect) -> bool {
        let changed = self.base.set_geometry(rect);
        self.arrange();
        changed
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.separation = theme.separation;
        for button in &mut self.buttons {
            button.apply_theme(theme);
        }
        self.arrange();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ButtonRow {
        ButtonRow::new("Save & Close", "Cancel", "Don't Save")
    }

    #[test]
    fn test_button_minimum_size() {
        let button = Button::new("Cancel");
        assert_eq!(button.minimum_size(), Size::new(42.0 + 16.0, 24.0));
    }

    #[test]
    fn test_row_minimum_size() {
        // 12, 6 and 10 characters at 7px, plus 16px padding each, plus 6 gaps.
        let expected = (28.0 * 7.0 + 3.0 * 16.0) + 6.0 * 4.0;
        assert_eq!(row().minimum_size(), Size::new(expected, 24.0));
    }

    #[test]
    fn test_row_distributes_extra_width_to_spacers() {
        let mut row = row();
        let min = row.minimum_size().width;
        row.set_geometry(Rect::new(10.0, 50.0, min + 40.0, 30.0));

        let save = row.button(DialogButton::SaveAndClose).geometry();
        let cancel = row.button(DialogButton::Cancel).geometry();
        let dont = row.button(DialogButton::DontSave).geometry();

        // Leading spacer gets 10px plus one separation.
        assert_eq!(save.left(), 10.0 + 10.0 + 4.0);
        assert_eq!(cancel.left(), save.right() + 4.0 + 10.0 + 4.0);
        assert_eq!(dont.left(), cancel.right() + 4.0 + 10.0 + 4.0);
        assert_eq!(dont.right() + 4.0 + 10.0, 10.0 + min + 40.0);
        assert_eq!(save.height(), 30.0);
    }

    #[test]
    fn test_row_at_minimum_width() {
        let mut row = row();
        let min = row.minimum_size().width;
        row.set_geometry(Rect::new(0.0, 0.0, min, 24.0));
        assert_eq!(row.button(DialogButton::SaveAndClose).geometry().left(), 4.0);
        assert_eq!(row.button(DialogButton::DontSave).geometry().right(), min - 4.0);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(DialogButton::DontSave.next(), DialogButton::SaveAndClose);
        assert_eq!(DialogButton::SaveAndClose.previous(), DialogButton::DontSave);

        let mut row = row();
        row.set_focused(Some(DialogButton::Cancel));
        assert!(row.button(DialogButton::Cancel).has_focus());
        assert!(!row.button(DialogButton::SaveAndClose).has_focus());
        row.set_focused(None);
        assert!(!row.button(DialogButton::Cancel).has_focus());
    }

    #[test]
    fn test_theme_updates_separation() {
        let mut row = row();
        let before = row.minimum_size().width;
        let mut theme = Theme::light();
        theme.separation = 6.0;
        row.apply_theme(&theme);
        assert_eq!(row.minimum_size().width, before + 12.0);
    }
}

//! The dialog's layout engine.
//!
//! [`DialogLayout`] owns the dialog's children and arranges them top to bottom:
//!
//! ```text
//! +------------------------------------+  background: whole dialog
//! |  margin                            |
//! |  label (one text line, or nothing) |
//! |  content: item list + extra        |
//! |  children, all sharing one rect    |
//! |  margin                            |
//! |  button row                        |
//! |  margin                            |
//! +------------------------------------+
//! ```
//!
//! Children flagged top-level position themselves and are skipped.

use savegate_core::logging::{span_names, targets};
use slotmap::{SlotMap, new_key_type};

use crate::config::DialogConfig;
use crate::geometry::{Rect, Size};
use crate::theme::Theme;
use crate::widget::{ButtonRow, ItemList, Label, Panel, SelectMode, Widget};

new_key_type! {
    /// Identifies a content child added to the dialog.
    pub struct ChildId;
}

/// The dialog's children and the arithmetic that places them.
#[derive(Debug)]
pub struct DialogLayout {
    background: Panel,
    label: Label,
    list: ItemList,
    buttons: ButtonRow,
    extras: SlotMap<ChildId, Box<dyn Widget>>,
    margin: f32,
    min_size: Size,
}

impl DialogLayout {
    /// Build the fixed children from a configuration, styled by `theme`.
    pub fn new(config: &DialogConfig, theme: &Theme) -> Self {
        let mut list = ItemList::new();
        list.set_select_mode(SelectMode::Multi);
        list.set_deselect_on_empty_click(config.deselect_on_empty_click);
        list.widget_base_mut()
            .set_custom_minimum_size(Size::new(0.0, config.list_min_height));

        let mut layout = Self {
            background: Panel::new(),
            label: Label::new(config.prompt.clone()),
            list,
            buttons: ButtonRow::new(
                &config.save_label,
                &config.cancel_label,
                &config.dont_save_label,
            ),
            extras: SlotMap::with_key(),
            margin: theme.margin,
            min_size: config.min_size,
        };
        layout.apply_theme(theme);
        layout
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// The prompt label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The prompt label, mutably.
    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The item list.
    pub fn list(&self) -> &ItemList {
        &self.list
    }

    /// The item list, mutably.
    pub fn list_mut(&mut self) -> &mut ItemList {
        &mut self.list
    }

    /// The button row.
    pub fn buttons(&self) -> &ButtonRow {
        &self.buttons
    }

    /// The button row, mutably.
    pub fn buttons_mut(&mut self) -> &mut ButtonRow {
        &mut self.buttons
    }

    /// The background panel.
    pub fn background(&self) -> &Panel {
        &self.background
    }

    /// Add a content child. It shares the content rectangle with the list.
    pub fn add_child(&mut self, child: Box<dyn Widget>) -> ChildId {
        self.extras.insert(child)
    }

    /// Remove a content child.
    pub fn remove_child(&mut self, id: ChildId) -> Option<Box<dyn Widget>> {
        self.extras.remove(id)
    }

    /// Look up a content child.
    pub fn child(&self, id: ChildId) -> Option<&dyn Widget> {
        self.extras.get(id).map(|child| child.as_ref())
    }

    /// The list followed by every extra child, top-level ones included.
    fn content_children(&self) -> impl Iterator<Item = &dyn Widget> + '_ {
        let list: &dyn Widget = &self.list;
        std::iter::once(list).chain(self.extras.values().map(|child| -> &dyn Widget { child.as_ref() }))
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// The theme margin currently in effect.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// The configured absolute minimum size.
    pub fn absolute_minimum_size(&self) -> Size {
        self.min_size
    }

    /// Smallest size that fits every child plus margins.
    ///
    /// Label, background and content children are combined by component-wise
    /// maximum. The button row's height is added on top and its width is a
    /// floor. One margin goes on each side and three are stacked vertically.
    /// The width is finally raised to the configured minimum width.
    pub fn minimum_content_size(&self) -> Size {
        let mut min = self.label.minimum_size();

        let background: &dyn Widget = &self.background;
        let others = self
            .content_children()
            .chain(std::iter::once(background))
            .filter(|child| !child.is_top_level());
        for child in others {
            min = min.max(child.minimum_size());
        }

        let row = self.buttons.minimum_size();
        min.width = min.width.max(row.width);
        min.height += row.height;

        min.width += self.margin * 2.0;
        min.height += self.margin * 3.0;

        min.width = min.width.max(self.min_size.width);
        min
    }

    /// The window-level minimum: content minimum raised to the configured
    /// minimum in both axes.
    pub fn minimum_size(&self) -> Size {
        self.minimum_content_size().max(self.min_size)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Position every child for a dialog of `size`.
    ///
    /// Depends only on `size`, the children's minimum sizes and the margin,
    /// so repeated calls produce identical rectangles.
    pub fn layout(&mut self, size: Size) {
        let _span = tracing::debug_span!(target: targets::LAYOUT, span_names::LAYOUT).entered();
        let m = self.margin;

        let label_height = if self.label.is_empty() {
            0.0
        } else {
            self.label.minimum_size().height
        };
        let inner_width = (size.width - m * 2.0).max(0.0);
        let label_rect = Rect::new(m, m, inner_width, label_height);
        self.label.set_geometry(label_rect);

        let row_height = self.buttons.minimum_size().height;
        let content = Rect::new(
            m,
            m + label_height,
            inner_width,
            (size.height - m * 3.0 - row_height - label_height).max(0.0),
        );

        let list_changed = self.list.set_geometry(content);
        for child in self.extras.values_mut() {
            if !child.is_top_level() {
                child.set_geometry(content);
            }
        }

        let row_rect = Rect::new(m, content.bottom() + m, inner_width, row_height);
        self.buttons.set_geometry(row_rect);

        self.background.set_geometry(Rect::new(0.0, 0.0, size.width, size.height));

        tracing::debug!(
            target: targets::LAYOUT,
            width = size.width,
            height = size.height,
            ?label_rect,
            ?content,
            ?row_rect,
            list_changed,
            "dialog laid out"
        );
    }

    /// Restyle every child and pick up the theme's margin.
    ///
    /// Geometry is left alone until the next [`layout`](Self::layout).
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.margin = theme.margin;
        self.background.apply_theme(theme);
        self.label.apply_theme(theme);
        self.list.apply_theme(theme);
        self.buttons.apply_theme(theme);
        for child in self.extras.values_mut() {
            child.apply_theme(theme);
        }
    }
}

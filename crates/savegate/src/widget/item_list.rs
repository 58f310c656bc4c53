//! Multi-select item list.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::event::Modifiers;
use crate::geometry::{Point, Size};
use crate::theme::Theme;

use super::{Widget, WidgetBase};

/// An opaque icon handle.
///
/// The list only carries icons to the renderer; it never looks inside.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IconHandle(Arc<str>);

impl IconHandle {
    /// Create a handle naming an icon in the host's icon set.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The icon name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IconHandle").field(&&*self.0).finish()
    }
}

/// Selection behavior of an [`ItemList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// At most one row is selected.
    Single,
    /// Any set of rows may be selected.
    #[default]
    Multi,
}

/// A row of an [`ItemList`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Display text.
    pub text: String,
    /// Optional icon drawn before the text.
    pub icon: Option<IconHandle>,
}

/// Result of hit-testing a point against the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPick {
    /// The point is over a row.
    Row(usize),
    /// The point is inside the list but below the last row.
    Empty,
    /// The point is outside the list.
    Outside,
}

/// A vertical list of text rows with a selection.
///
/// Selected rows are kept as an ordered set, so [`selected_rows`] is always
/// ascending and free of duplicates.
///
/// [`selected_rows`]: ItemList::selected_rows
#[derive(Debug, Clone)]
pub struct ItemList {
    base: WidgetBase,
    items: Vec<ListItem>,
    select_mode: SelectMode,
    selected: BTreeSet<usize>,
    current: Option<usize>,
    deselect_on_empty_click: bool,
    row_height: f32,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    /// Create an empty multi-select list.
    pub fn new() -> Self {
        let mut list = Self {
            base: WidgetBase::new(),
            items: Vec::new(),
            select_mode: SelectMode::Multi,
            selected: BTreeSet::new(),
            current: None,
            deselect_on_empty_click: true,
            row_height: 0.0,
        };
        list.apply_theme(&Theme::default());
        list
    }

    /// The selection behavior.
    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    /// Change the selection behavior. Switching to single selection keeps
    /// only the lowest selected row.
    pub fn set_select_mode(&mut self, mode: SelectMode) {
        self.select_mode = mode;
        if mode == SelectMode::Single {
            let first = self.selected.first().copied();
            self.selected.clear();
            self.selected.extend(first);
        }
    }

    /// Whether clicking below the last row clears the selection.
    pub fn deselect_on_empty_click(&self) -> bool {
        self.deselect_on_empty_click
    }

    /// Set whether clicking below the last row clears the selection.
    pub fn set_deselect_on_empty_click(&mut self, enabled: bool) {
        self.deselect_on_empty_click = enabled;
    }

    /// Height of one row.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Remove all rows, the selection and the current row.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected.clear();
        self.current = None;
    }

    /// Append a row and return its index.
    pub fn add_item(&mut self, text: impl Into<String>, icon: Option<IconHandle>) -> usize {
        self.items.push(ListItem {
            text: text.into(),
            icon,
        });
        self.items.len() - 1
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a row.
    pub fn item(&self, row: usize) -> Option<&ListItem> {
        self.items.get(row)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selected row indices, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Check whether a row is selected.
    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    /// The row that last received a click or activation.
    pub fn current_row(&self) -> Option<usize> {
        self.current
    }

    /// Select a row. In single mode this replaces the selection.
    ///
    /// Returns `false` if the row does not exist or nothing changed.
    pub fn select(&mut self, row: usize) -> bool {
        if row >= self.items.len() {
            return false;
        }
        match self.select_mode {
            SelectMode::Multi => self.selected.insert(row),
            SelectMode::Single => self.select_only(row),
        }
    }

    /// Deselect a row. Returns `true` if it was selected.
    pub fn deselect(&mut self, row: usize) -> bool {
        self.selected.remove(&row)
    }

    /// Clear the selection. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        let had_selection = !self.selected.is_empty();
        self.selected.clear();
        had_selection
    }

    fn select_only(&mut self, row: usize) -> bool {
        if self.selected.len() == 1 && self.selected.contains(&row) {
            return false;
        }
        self.selected.clear();
        self.selected.insert(row);
        true
    }

    /// Apply a pointer click on a row.
    ///
    /// In multi mode a plain click selects only the row, Ctrl toggles it, and
    /// Shift selects the range from the current row. Returns `true` if the
    /// selection changed.
    pub fn click_row(&mut self, row: usize, modifiers: Modifiers) -> bool {
        if row >= self.items.len() {
            return false;
        }

        let changed = match self.select_mode {
            SelectMode::Single => self.select_only(row),
            SelectMode::Multi if modifiers.ctrl => {
                if !self.selected.remove(&row) {
                    self.selected.insert(row);
                }
                true
            }
            SelectMode::Multi if modifiers.shift => {
                let anchor = self.current.unwrap_or(row);
                let range: BTreeSet<usize> = (anchor.min(row)..=anchor.max(row)).collect();
                let changed = range != self.selected;
                self.selected = range;
                changed
            }
            SelectMode::Multi => self.select_only(row),
        };

        if !(modifiers.shift && self.current.is_some()) {
            self.current = Some(row);
        }
        changed
    }

    /// Apply a pointer click below the last row.
    ///
    /// Returns `true` if the selection was cleared.
    pub fn click_empty_area(&mut self) -> bool {
        if !self.deselect_on_empty_click {
            return false;
        }
        self.clear_selection()
    }

    /// Activate a row (double-click or Enter on the row) and return its text.
    pub fn activate_row(&mut self, row: usize) -> Option<&str> {
        let item = self.items.get(row)?;
        self.current = Some(row);
        Some(item.text.as_str())
    }

    /// Hit-test a point given in dialog coordinates.
    pub fn pick(&self, point: Point) -> ListPick {
        let rect = self.base.geometry();
        if !rect.contains(point) {
            return ListPick::Outside;
        }
        if self.row_height <= 0.0 {
            return ListPick::Empty;
        }
        let row = ((point.y - rect.top()) / self.row_height) as usize;
        if row < self.items.len() {
            ListPick::Row(row)
        } else {
            ListPick::Empty
        }
    }
}

impl Widget for ItemList {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Room for one row; the dialog sets the real floor as a custom minimum.
    fn intrinsic_minimum_size(&self) -> Size {
        Size::new(0.0, self.row_height)
    }

    fn apply_theme(&mut self, theme: &Theme) {
        self.row_height = theme.font.line_height + theme.button_padding_v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn list(rows: usize) -> ItemList {
        let mut list = ItemList::new();
        for i in 0..rows {
            list.add_item(format!("res://item_{i}.tres"), None);
        }
        list
    }

    #[test]
    fn test_plain_click_selects_only_row() {
        let mut list = list(4);
        assert!(list.click_row(1, Modifiers::NONE));
        assert!(list.click_row(3, Modifiers::NONE));
        assert_eq!(list.selected_rows(), vec![3]);
        assert!(!list.click_row(3, Modifiers::NONE));
    }

    #[test]
    fn test_ctrl_click_toggles() {
        let mut list = list(4);
        list.click_row(2, Modifiers::CTRL);
        list.click_row(0, Modifiers::CTRL);
        assert_eq!(list.selected_rows(), vec![0, 2]);
        list.click_row(2, Modifiers::CTRL);
        assert_eq!(list.selected_rows(), vec![0]);
    }

    #[test]
    fn test_shift_click_selects_range_from_current() {
        let mut list = list(6);
        list.click_row(4, Modifiers::NONE);
        list.click_row(1, Modifiers::SHIFT);
        assert_eq!(list.selected_rows(), vec![1, 2, 3, 4]);
        assert_eq!(list.current_row(), Some(4));

        list.click_row(5, Modifiers::SHIFT);
        assert_eq!(list.selected_rows(), vec![4, 5]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut list = list(2);
        assert!(!list.click_row(2, Modifiers::NONE));
        assert!(list.selected_rows().is_empty());
        assert!(!list.select(9));
    }

    #[test]
    fn test_single_mode() {
        let mut list = list(3);
        list.select(0);
        list.select(2);
        assert_eq!(list.selected_rows(), vec![0, 2]);

        list.set_select_mode(SelectMode::Single);
        assert_eq!(list.selected_rows(), vec![0]);
        list.click_row(1, Modifiers::CTRL);
        assert_eq!(list.selected_rows(), vec![1]);
    }

    #[test]
    fn test_click_empty_area() {
        let mut list = list(3);
        list.select(1);
        assert!(list.click_empty_area());
        assert!(list.selected_rows().is_empty());
        assert!(!list.click_empty_area());

        list.select(1);
        list.set_deselect_on_empty_click(false);
        assert!(!list.click_empty_area());
        assert_eq!(list.selected_rows(), vec![1]);
    }

    #[test]
    fn test_activate_row() {
        let mut list = list(2);
        assert_eq!(list.activate_row(1), Some("res://item_1.tres"));
        assert_eq!(list.current_row(), Some(1));
        assert_eq!(list.activate_row(5), None);
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut list = list(3);
        list.click_row(2, Modifiers::NONE);
        list.clear();
        assert!(list.is_empty());
        assert!(list.selected_rows().is_empty());
        assert_eq!(list.current_row(), None);
    }

    #[test]
    fn test_pick() {
        let mut list = list(2);
        list.set_geometry(Rect::new(8.0, 24.0, 200.0, 200.0));
        let row = list.row_height();

        assert_eq!(list.pick(Point::new(20.0, 24.0 + 0.5 * row)), ListPick::Row(0));
        assert_eq!(list.pick(Point::new(20.0, 24.0 + 1.5 * row)), ListPick::Row(1));
        assert_eq!(list.pick(Point::new(20.0, 24.0 + 2.5 * row)), ListPick::Empty);
        assert_eq!(list.pick(Point::new(0.0, 30.0)), ListPick::Outside);
    }

    #[test]
    fn test_icon_handle() {
        let icon = IconHandle::new("PackedScene");
        assert_eq!(icon.name(), "PackedScene");
        assert_eq!(format!("{icon:?}"), "IconHandle(\"PackedScene\")");
    }
}

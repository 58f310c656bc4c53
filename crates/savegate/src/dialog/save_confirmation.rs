//! The modal save-confirmation controller.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use savegate_core::logging::{span_names, targets};
use savegate_core::{ConnectionId, EventLoop, Signal, TaskId};

use super::item::PendingItem;
use super::layout::{ChildId, DialogLayout};
use super::outcome::{CancelReason, Outcome};
use crate::config::DialogConfig;
use crate::event::{DialogEvent, Key, KeyPressEvent, Modifiers};
use crate::geometry::{Point, Rect, Size};
use crate::theme::Theme;
use crate::widget::{DialogButton, ListPick, Widget};
use crate::window::{DialogId, OwnerWindow, WindowHost, WindowModality};

// ============================================================================
// Internal State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Visible,
    /// Cancelled; the hide runs on the next event-loop turn.
    Closing,
}

/// Weak back-reference to the owner window and the focus hook installed on it.
#[derive(Debug)]
struct FocusLink {
    owner: Weak<OwnerWindow>,
    connection: ConnectionId,
}

impl FocusLink {
    fn attach(owner: &Arc<OwnerWindow>, dialog: Weak<DialogInner>) -> Self {
        let connection = owner.focus_entered.connect(move |_| {
            if let Some(inner) = dialog.upgrade() {
                SaveConfirmationDialog { inner }.owner_focus_entered();
            }
        });
        tracing::debug!(target: targets::FOCUS, window = ?owner.id(), "focus link attached");
        Self {
            owner: Arc::downgrade(owner),
            connection,
        }
    }

    /// Unregister the hook. A no-op once the owner is gone.
    fn release(self) {
        let disconnected = self
            .owner
            .upgrade()
            .is_some_and(|owner| owner.focus_entered.disconnect(self.connection));
        tracing::debug!(target: targets::FOCUS, disconnected, "focus link released");
    }
}

#[derive(Debug)]
struct DialogState {
    phase: Phase,
    /// Row `i` of the list shows `items[i]`.
    items: Vec<PendingItem>,
    layout: DialogLayout,
    theme: Theme,
    size: Size,
    position: Point,
    focus_link: Option<FocusLink>,
    last_outcome: Option<Outcome>,
    /// Bumped by every `present`; a deferred hide only applies to its own.
    generation: u64,
    pending_hide: Option<TaskId>,
}

struct DialogInner {
    id: DialogId,
    host: Arc<dyn WindowHost>,
    event_loop: EventLoop,
    config: DialogConfig,
    signals: DialogSignals,
    state: Mutex<DialogState>,
}

impl DialogInner {
    /// Hide without an outcome, releasing everything the presentation holds.
    fn teardown(&self) {
        let (link, task, was_shown) = {
            let mut state = self.state.lock();
            let was_shown = state.phase != Phase::Hidden;
            state.phase = Phase::Hidden;
            state.layout.buttons_mut().set_focused(None);
            (state.focus_link.take(), state.pending_hide.take(), was_shown)
        };

        if let Some(task) = task {
            self.event_loop.cancel_task(task);
        }
        if let Some(link) = link {
            link.release();
        }
        if was_shown {
            self.host.dialog_hidden(self.id);
            tracing::debug!(target: targets::DIALOG, dialog = self.id.as_u64(), "dialog torn down while shown");
        }
    }

    fn finish_deferred_hide(&self, generation: u64) {
        let link = {
            let mut state = self.state.lock();
            if state.generation != generation || state.phase != Phase::Closing {
                tracing::trace!(target: targets::DIALOG, dialog = self.id.as_u64(), "stale deferred hide skipped");
                return;
            }
            state.pending_hide = None;
            state.phase = Phase::Hidden;
            state.layout.buttons_mut().set_focused(None);
            state.focus_link.take()
        };

        if let Some(link) = link {
            link.release();
        }
        self.host.dialog_hidden(self.id);
        tracing::debug!(target: targets::DIALOG, dialog = self.id.as_u64(), "deferred hide ran");
    }
}

impl Drop for DialogInner {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ============================================================================
// Signals
// ============================================================================

/// Notifications emitted by a [`SaveConfirmationDialog`].
///
/// Exactly one of `save_and_close`, `cancelled` or `dont_save` fires per
/// presentation, immediately followed by `finished` with the same outcome.
/// Slots run after the dialog has released its internal lock and may call
/// back into the dialog, including `present`.
#[derive(Debug, Default)]
pub struct DialogSignals {
    /// The user chose to save the selected items.
    pub save_and_close: Signal<()>,
    /// The user cancelled the guarded action.
    pub cancelled: Signal<()>,
    /// The user chose to discard changes.
    pub dont_save: Signal<()>,
    /// Fired after each outcome-specific signal.
    pub finished: Signal<Outcome>,
    /// A row was activated; carries the item's path.
    pub resource_file_activated: Signal<String>,
    /// The selection changed through user input; carries the selected rows.
    pub selection_changed: Signal<Vec<usize>>,
    /// The empty area below the rows was clicked.
    pub nothing_selected: Signal<()>,
}

// ============================================================================
// SaveConfirmationDialog
// ============================================================================

/// A modal dialog asking which unsaved items to keep before an action proceeds.
///
/// The dialog is a cheap-clone handle; clones share one dialog. Dropping the
/// last handle tears the dialog down like [`exit_tree`](Self::exit_tree).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use savegate::prelude::*;
///
/// let event_loop = EventLoop::new();
/// let windows = Arc::new(WindowManager::new(Size::new(1920.0, 1080.0)));
/// let dialog = SaveConfirmationDialog::new(windows.clone(), event_loop.clone());
///
/// dialog.signals().save_and_close.connect(|_| println!("saving"));
///
/// dialog.present(vec![PendingItem::scene("res://main.tscn")]);
/// dialog.select_row(0);
/// dialog.press(DialogButton::SaveAndClose);
///
/// assert!(!dialog.is_visible());
/// assert_eq!(dialog.selected_items().len(), 1);
/// ```
#[derive(Clone)]
pub struct SaveConfirmationDialog {
    inner: Arc<DialogInner>,
}

/// A weak reference to a [`SaveConfirmationDialog`], for use inside its own
/// signal handlers.
#[derive(Clone)]
pub struct WeakDialog {
    inner: Weak<DialogInner>,
}

impl WeakDialog {
    /// Get the dialog if it still exists.
    pub fn upgrade(&self) -> Option<SaveConfirmationDialog> {
        self.inner
            .upgrade()
            .map(|inner| SaveConfirmationDialog { inner })
    }
}

impl fmt::Debug for SaveConfirmationDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("SaveConfirmationDialog")
            .field("id", &self.inner.id)
            .field("phase", &state.phase)
            .field("items", &state.items.len())
            .field("focus_linked", &state.focus_link.is_some())
            .field("last_outcome", &state.last_outcome)
            .finish()
    }
}

impl SaveConfirmationDialog {
    /// Create a hidden dialog with the default configuration.
    pub fn new(host: Arc<dyn WindowHost>, event_loop: EventLoop) -> Self {
        Self::with_config(host, event_loop, DialogConfig::default())
    }

    /// Create a hidden dialog.
    pub fn with_config(host: Arc<dyn WindowHost>, event_loop: EventLoop, config: DialogConfig) -> Self {
        let theme = Theme::for_mode(config.theme);
        let layout = DialogLayout::new(&config, &theme);
        let size = layout.minimum_size();
        let id = DialogId::next();
        tracing::debug!(target: targets::DIALOG, dialog = id.as_u64(), title = %config.title, "dialog created");

        Self {
            inner: Arc::new(DialogInner {
                id,
                host,
                event_loop,
                config,
                signals: DialogSignals::default(),
                state: Mutex::new(DialogState {
                    phase: Phase::Hidden,
                    items: Vec::new(),
                    layout,
                    theme,
                    size,
                    position: Point::ZERO,
                    focus_link: None,
                    last_outcome: None,
                    generation: 0,
                    pending_hide: None,
                }),
            }),
        }
    }

    /// Create a weak reference to this dialog.
    pub fn downgrade(&self) -> WeakDialog {
        WeakDialog {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// The dialog's identity towards its host.
    pub fn id(&self) -> DialogId {
        self.inner.id
    }

    /// The dialog's signals.
    pub fn signals(&self) -> &DialogSignals {
        &self.inner.signals
    }

    /// The configuration the dialog was built with.
    pub fn config(&self) -> &DialogConfig {
        &self.inner.config
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Show the dialog for `items`, replacing any current presentation.
    ///
    /// The list is repopulated with one row per item, the primary button gets
    /// focus, the dialog is centered over the currently focused window, and
    /// that window's focus hook is installed. A hide still pending from a
    /// previous cancel is dropped.
    pub fn present(&self, items: Vec<PendingItem>) {
        let _span = tracing::debug_span!(
            target: targets::DIALOG,
            span_names::PRESENTATION,
            dialog = self.inner.id.as_u64(),
            items = items.len()
        )
        .entered();

        let (stale_link, stale_task, generation) = {
            let mut guard = self.inner.state.lock();
            let state = &mut *guard;
            let stale_link = state.focus_link.take();
            let stale_task = state.pending_hide.take();
            state.generation += 1;
            state.last_outcome = None;
            state.phase = Phase::Visible;

            let list = state.layout.list_mut();
            list.clear();
            for item in &items {
                list.add_item(item.path.clone(), item.icon.clone());
            }
            state.items = items;
            state
                .layout
                .buttons_mut()
                .set_focused(Some(DialogButton::SaveAndClose));
            (stale_link, stale_task, state.generation)
        };

        if let Some(task) = stale_task {
            self.inner.event_loop.cancel_task(task);
            tracing::debug!(target: targets::DIALOG, "pending hide dropped by new presentation");
        }
        if let Some(link) = stale_link {
            link.release();
        }

        let owner = self.inner.host.visible_parent_window();
        let link = owner
            .as_ref()
            .map(|owner| FocusLink::attach(owner, Arc::downgrade(&self.inner)));

        let size = {
            let mut state = self.inner.state.lock();
            let min = state.layout.minimum_size();
            state.size = state.size.max(min);
            state.size
        };
        let modality = self.modality(owner.is_some());
        let rect = self
            .inner
            .host
            .popup_centered(self.inner.id, owner.as_deref(), size, modality);

        let mut guard = self.inner.state.lock();
        if guard.generation != generation {
            drop(guard);
            if let Some(link) = link {
                link.release();
            }
            return;
        }
        let state = &mut *guard;
        state.position = rect.origin;
        state.focus_link = link;
        state.layout.layout(state.size);

        tracing::debug!(
            target: targets::DIALOG,
            dialog = self.inner.id.as_u64(),
            items = state.items.len(),
            linked = state.focus_link.is_some(),
            ?modality,
            ?rect,
            "dialog presented"
        );
    }

    fn modality(&self, has_owner: bool) -> WindowModality {
        match (self.inner.config.exclusive, has_owner) {
            (false, _) => WindowModality::NonModal,
            (true, true) => WindowModality::WindowModal,
            (true, false) => WindowModality::ApplicationModal,
        }
    }

    /// Items of the current presentation whose rows are selected, in row order.
    pub fn selected_items(&self) -> Vec<PendingItem> {
        let state = self.inner.state.lock();
        state
            .layout
            .list()
            .selected_rows()
            .into_iter()
            .filter_map(|row| {
                let item = state.items.get(row);
                if item.is_none() {
                    tracing::warn!(
                        target: targets::DIALOG,
                        row,
                        items = state.items.len(),
                        "selected row has no matching item, skipped"
                    );
                }
                item.cloned()
            })
            .collect()
    }

    /// Activate one of the three buttons.
    ///
    /// Returns `false` if the dialog is hidden or this presentation already
    /// has an outcome.
    pub fn press(&self, button: DialogButton) -> bool {
        match button {
            DialogButton::Cancel => self.cancel(CancelReason::Button),
            DialogButton::SaveAndClose => self.resolve(Outcome::SaveAndClose),
            DialogButton::DontSave => self.resolve(Outcome::DontSave),
        }
    }

    /// Hide now, then emit the outcome.
    fn resolve(&self, outcome: Outcome) -> bool {
        let link = {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                tracing::debug!(target: targets::DIALOG, %outcome, phase = ?state.phase, "activation ignored");
                return false;
            }
            state.phase = Phase::Hidden;
            state.last_outcome = Some(outcome);
            state.layout.buttons_mut().set_focused(None);
            state.focus_link.take()
        };

        if let Some(link) = link {
            link.release();
        }
        self.inner.host.dialog_hidden(self.inner.id);
        tracing::debug!(target: targets::DIALOG, dialog = self.inner.id.as_u64(), %outcome, "presentation resolved");

        let signals = &self.inner.signals;
        match outcome {
            Outcome::SaveAndClose => signals.save_and_close.emit(()),
            Outcome::DontSave => signals.dont_save.emit(()),
            Outcome::Cancelled => signals.cancelled.emit(()),
        }
        signals.finished.emit(outcome);
        true
    }

    /// Release the focus link, defer the hide, then emit `cancelled`.
    fn cancel(&self, reason: CancelReason) -> bool {
        let (link, generation) = {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                tracing::debug!(target: targets::DIALOG, ?reason, phase = ?state.phase, "cancel ignored");
                return false;
            }
            state.phase = Phase::Closing;
            state.last_outcome = Some(Outcome::Cancelled);
            (state.focus_link.take(), state.generation)
        };

        if let Some(link) = link {
            link.release();
        }

        let weak = Arc::downgrade(&self.inner);
        let task = self.inner.event_loop.post_task(move || {
            if let Some(inner) = weak.upgrade() {
                inner.finish_deferred_hide(generation);
            }
        });
        {
            let mut state = self.inner.state.lock();
            if state.generation == generation {
                state.pending_hide = Some(task);
            }
        }
        tracing::debug!(target: targets::DIALOG, dialog = self.inner.id.as_u64(), ?reason, "presentation cancelled, hide deferred");

        self.inner.signals.cancelled.emit(());
        self.inner.signals.finished.emit(Outcome::Cancelled);
        true
    }

    fn owner_focus_entered(&self) {
        if self.inner.config.exclusive {
            tracing::debug!(target: targets::FOCUS, "owner focused under exclusive dialog, ignored");
            return;
        }
        self.cancel(CancelReason::OwnerFocused);
    }

    /// Tear down as if the dialog were removed from its window tree.
    ///
    /// Releases the focus link, drops a pending deferred hide and lifts input
    /// blocking. Emits nothing. Safe to call repeatedly.
    pub fn exit_tree(&self) {
        self.inner.teardown();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a window event to the dialog. Returns `true` if it was consumed.
    pub fn handle_event(&self, event: &DialogEvent) -> bool {
        match event {
            DialogEvent::KeyPress(key) => self.handle_key(key),
            DialogEvent::MouseDown {
                position,
                modifiers,
                double_click,
            } => self.handle_mouse(*position, *modifiers, *double_click),
            DialogEvent::CloseRequested => self.cancel(CancelReason::CloseRequest),
            DialogEvent::Resized(size) => {
                self.resize(*size);
                true
            }
            DialogEvent::ThemeChanged(theme) => {
                self.set_theme(theme.clone());
                true
            }
        }
    }

    fn handle_key(&self, key: &KeyPressEvent) -> bool {
        let focused = {
            let state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                return false;
            }
            state.layout.buttons().focused()
        };

        match key.key {
            Key::Escape => self.cancel(CancelReason::Escape),
            Key::Enter | Key::Space if key.is_repeat => false,
            Key::Enter | Key::Space => focused.is_some_and(|button| self.press(button)),
            Key::Tab => {
                let current = focused.unwrap_or(DialogButton::SaveAndClose);
                let next = if key.modifiers.shift {
                    current.previous()
                } else {
                    current.next()
                };
                self.inner
                    .state
                    .lock()
                    .layout
                    .buttons_mut()
                    .set_focused(Some(next));
                true
            }
            Key::Character(_) => false,
        }
    }

    fn handle_mouse(&self, position: Point, modifiers: Modifiers, double_click: bool) -> bool {
        let pick = {
            let state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                return false;
            }
            state.layout.list().pick(position)
        };

        match pick {
            ListPick::Row(row) if double_click => {
                self.activate_row(row);
                true
            }
            ListPick::Row(row) => {
                self.click_row(row, modifiers);
                true
            }
            ListPick::Empty => {
                self.click_empty_area();
                true
            }
            ListPick::Outside => false,
        }
    }

    /// Click a row with the given modifiers. Returns `true` if the selection
    /// changed.
    pub fn click_row(&self, row: usize, modifiers: Modifiers) -> bool {
        let selection = {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                return false;
            }
            let list = state.layout.list_mut();
            if !list.click_row(row, modifiers) {
                return false;
            }
            list.selected_rows()
        };
        self.inner.signals.selection_changed.emit(selection);
        true
    }

    /// Click the empty area below the rows. Returns `true` if the selection
    /// was cleared.
    pub fn click_empty_area(&self) -> bool {
        let (enabled, cleared) = {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                return false;
            }
            let list = state.layout.list_mut();
            (list.deselect_on_empty_click(), list.click_empty_area())
        };

        if cleared {
            self.inner.signals.selection_changed.emit(Vec::new());
        }
        if enabled {
            self.inner.signals.nothing_selected.emit(());
        }
        cleared
    }

    /// Select a row programmatically. Returns `true` if the selection changed.
    pub fn select_row(&self, row: usize) -> bool {
        let selection = {
            let mut state = self.inner.state.lock();
            let list = state.layout.list_mut();
            if !list.select(row) {
                return false;
            }
            list.selected_rows()
        };
        self.inner.signals.selection_changed.emit(selection);
        true
    }

    /// Deselect a row programmatically. Returns `true` if it was selected.
    pub fn deselect_row(&self, row: usize) -> bool {
        let selection = {
            let mut state = self.inner.state.lock();
            let list = state.layout.list_mut();
            if !list.deselect(row) {
                return false;
            }
            list.selected_rows()
        };
        self.inner.signals.selection_changed.emit(selection);
        true
    }

    /// Activate a row and forward its path through `resource_file_activated`.
    pub fn activate_row(&self, row: usize) -> bool {
        let path = {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Visible {
                return false;
            }
            match state.layout.list_mut().activate_row(row) {
                Some(path) => path.to_owned(),
                None => return false,
            }
        };
        tracing::debug!(target: targets::DIALOG, row, %path, "item activated");
        self.inner.signals.resource_file_activated.emit(path);
        true
    }

    // =========================================================================
    // Geometry and Theme
    // =========================================================================

    /// Resize the dialog, never below [`minimum_size`](Self::minimum_size).
    /// Lays the children out again while shown.
    pub fn resize(&self, size: Size) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        state.size = size.max(state.layout.minimum_size());
        if state.phase != Phase::Hidden {
            state.layout.layout(state.size);
        }
    }

    /// Switch theme. Children are restyled in place; positions update on the
    /// next show or resize.
    pub fn set_theme(&self, theme: Theme) {
        let mut state = self.inner.state.lock();
        state.layout.apply_theme(&theme);
        tracing::debug!(target: targets::DIALOG, mode = ?theme.mode, margin = theme.margin, "theme applied");
        state.theme = theme;
    }

    /// Add a widget that shares the content area with the item list.
    pub fn add_content_child(&self, mut child: Box<dyn Widget>) -> ChildId {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        child.apply_theme(&state.theme);
        let id = state.layout.add_child(child);
        if state.phase != Phase::Hidden {
            state.size = state.size.max(state.layout.minimum_size());
            state.layout.layout(state.size);
        }
        id
    }

    /// Remove a widget added with [`add_content_child`](Self::add_content_child).
    pub fn remove_content_child(&self, id: ChildId) -> Option<Box<dyn Widget>> {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        let child = state.layout.remove_child(id)?;
        if state.phase != Phase::Hidden {
            state.layout.layout(state.size);
        }
        Some(child)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the dialog is shown. Stays `true` after a cancel until the
    /// deferred hide has run.
    pub fn is_visible(&self) -> bool {
        self.inner.state.lock().phase != Phase::Hidden
    }

    /// Outcome of the most recent presentation, once it has one.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.inner.state.lock().last_outcome
    }

    /// Items of the current (or last) presentation.
    pub fn presented_items(&self) -> Vec<PendingItem> {
        self.inner.state.lock().items.clone()
    }

    /// Selected row indices, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.inner.state.lock().layout.list().selected_rows()
    }

    /// The button with keyboard focus.
    pub fn focused_button(&self) -> Option<DialogButton> {
        self.inner.state.lock().layout.buttons().focused()
    }

    /// Whether a focus hook is installed on an owner window.
    pub fn is_focus_linked(&self) -> bool {
        self.inner.state.lock().focus_link.is_some()
    }

    /// Current dialog size.
    pub fn size(&self) -> Size {
        self.inner.state.lock().size
    }

    /// Screen position from the last presentation.
    pub fn position(&self) -> Point {
        self.inner.state.lock().position
    }

    /// Smallest size that fits every child plus margins.
    pub fn minimum_content_size(&self) -> Size {
        self.inner.state.lock().layout.minimum_content_size()
    }

    /// Smallest size the dialog window accepts.
    pub fn minimum_size(&self) -> Size {
        self.inner.state.lock().layout.minimum_size()
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.inner.state.lock().theme.clone()
    }

    /// Rectangle of the prompt label.
    pub fn label_geometry(&self) -> Rect {
        self.inner.state.lock().layout.label().geometry()
    }

    /// Rectangle of the item list.
    pub fn list_geometry(&self) -> Rect {
        self.inner.state.lock().layout.list().geometry()
    }

    /// Rectangle of the button row.
    pub fn button_row_geometry(&self) -> Rect {
        self.inner.state.lock().layout.buttons().geometry()
    }

    /// Rectangle of one button.
    pub fn button_geometry(&self, button: DialogButton) -> Rect {
        self.inner.state.lock().layout.buttons().button(button).geometry()
    }

    /// Rectangle of the background panel.
    pub fn background_geometry(&self) -> Rect {
        self.inner.state.lock().layout.background().geometry()
    }

    /// Rectangle of a content child.
    pub fn child_geometry(&self, id: ChildId) -> Option<Rect> {
        self.inner.state.lock().layout.child(id).map(|child| child.geometry())
    }
}

static_assertions::assert_impl_all!(SaveConfirmationDialog: Send, Sync);
static_assertions::assert_impl_all!(WeakDialog: Send, Sync);

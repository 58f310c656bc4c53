//! Property tests for the dialog's bookkeeping and layout.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use savegate::prelude::*;
use savegate::widget::{Panel, Widget};
use savegate::DialogLayout;

fn item_strategy() -> impl Strategy<Value = PendingItem> {
    (0..3u8, "[a-z]{1,8}").prop_map(|(kind, stem)| match kind {
        0 => PendingItem::scene(format!("res://{stem}.tscn")),
        1 => PendingItem::script(format!("res://{stem}.gd")),
        _ => PendingItem::resource(format!("res://{stem}.tres")),
    })
}

fn items_with_mask() -> impl Strategy<Value = (Vec<PendingItem>, Vec<bool>)> {
    prop::collection::vec((item_strategy(), any::<bool>()), 0..16)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

#[derive(Debug, Clone)]
enum Action {
    Press(DialogButton),
    Key(Key, bool),
    CloseRequested,
    OwnerFocused,
    ClickRow(usize),
    Flush,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(DialogButton::ALL.to_vec()).prop_map(Action::Press),
        (
            prop::sample::select(vec![Key::Escape, Key::Enter, Key::Space, Key::Tab]),
            any::<bool>()
        )
            .prop_map(|(key, shift)| Action::Key(key, shift)),
        Just(Action::CloseRequested),
        Just(Action::OwnerFocused),
        (0..8usize).prop_map(Action::ClickRow),
        Just(Action::Flush),
    ]
}

struct Harness {
    windows: Arc<WindowManager>,
    event_loop: EventLoop,
    editor: Arc<OwnerWindow>,
    dialog: SaveConfirmationDialog,
    fired: Arc<AtomicUsize>,
}

impl Harness {
    fn new(exclusive: bool) -> Self {
        let windows = Arc::new(WindowManager::new(Size::new(1920.0, 1080.0)));
        let event_loop = EventLoop::new();
        let editor = windows.create_window("Editor", Rect::new(0.0, 0.0, 1920.0, 1080.0));
        windows.focus_window(editor.id()).unwrap();

        let config = DialogConfig {
            exclusive,
            ..DialogConfig::default()
        };
        let dialog = SaveConfirmationDialog::with_config(windows.clone(), event_loop.clone(), config);

        let fired = Arc::new(AtomicUsize::new(0));
        for signal in [
            &dialog.signals().save_and_close,
            &dialog.signals().cancelled,
            &dialog.signals().dont_save,
        ] {
            let fired = fired.clone();
            signal.connect(move |_| {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        Self {
            windows,
            event_loop,
            editor,
            dialog,
            fired,
        }
    }

    fn apply(&self, action: &Action) {
        match action {
            Action::Press(button) => {
                self.dialog.press(*button);
            }
            Action::Key(key, shift) => {
                let modifiers = if *shift { Modifiers::SHIFT } else { Modifiers::NONE };
                self.dialog.handle_event(&DialogEvent::KeyPress(
                    KeyPressEvent::new(*key).with_modifiers(modifiers),
                ));
            }
            Action::CloseRequested => {
                self.dialog.handle_event(&DialogEvent::CloseRequested);
            }
            Action::OwnerFocused => {
                let _ = self.windows.focus_window(self.editor.id());
            }
            Action::ClickRow(row) => {
                self.dialog.click_row(*row, Modifiers::CTRL);
            }
            Action::Flush => {
                self.event_loop.run_until_idle();
            }
        }
    }
}

proptest! {
    #[test]
    fn test_selected_items_match_selected_rows((items, mask) in items_with_mask()) {
        let harness = Harness::new(true);
        harness.dialog.present(items.clone());

        for (row, selected) in mask.iter().enumerate() {
            if *selected {
                harness.dialog.select_row(row);
            }
        }

        let expected: Vec<PendingItem> = items
            .iter()
            .zip(&mask)
            .filter(|(_, selected)| **selected)
            .map(|(item, _)| item.clone())
            .collect();
        let rows = harness.dialog.selected_rows();
        prop_assert_eq!(harness.dialog.selected_items(), expected);
        prop_assert_eq!(harness.dialog.selected_items().len(), rows.len());
        prop_assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_correspondence_survives_re_presentation(
        (first, _) in items_with_mask(),
        (second, mask) in items_with_mask(),
    ) {
        let harness = Harness::new(true);
        harness.dialog.present(first);
        harness.dialog.press(DialogButton::Cancel);
        harness.dialog.present(second.clone());
        harness.event_loop.run_until_idle();

        for (row, selected) in mask.iter().enumerate() {
            if *selected {
                harness.dialog.select_row(row);
            }
        }
        let expected: Vec<PendingItem> = second
            .iter()
            .zip(&mask)
            .filter(|(_, selected)| **selected)
            .map(|(item, _)| item.clone())
            .collect();
        prop_assert_eq!(harness.dialog.selected_items(), expected);
        prop_assert_eq!(harness.dialog.presented_items(), second);
    }

    #[test]
    fn test_exactly_one_outcome_per_presentation(
        exclusive in any::<bool>(),
        (items, _) in items_with_mask(),
        actions in prop::collection::vec(action_strategy(), 0..24),
        last in prop::sample::select(DialogButton::ALL.to_vec()),
    ) {
        let harness = Harness::new(exclusive);
        harness.dialog.present(items);

        for action in &actions {
            harness.apply(action);
            prop_assert!(harness.fired.load(Ordering::SeqCst) <= 1);
        }
        harness.apply(&Action::Press(last));
        harness.apply(&Action::Flush);

        prop_assert_eq!(harness.fired.load(Ordering::SeqCst), 1);
        prop_assert!(!harness.dialog.is_visible());
        prop_assert!(!harness.dialog.is_focus_linked());
        prop_assert_eq!(harness.editor.focus_entered.connection_count(), 0);
        prop_assert!(harness.dialog.last_outcome().is_some());
    }

    #[test]
    fn test_layout_is_idempotent(
        width in 0.0f32..2000.0,
        height in 0.0f32..2000.0,
        prompt in "[a-z ]{0,60}",
        extras in prop::collection::vec((0.0f32..800.0, 0.0f32..800.0, any::<bool>()), 0..4),
    ) {
        let config = DialogConfig { prompt, ..DialogConfig::default() };
        let mut layout = DialogLayout::new(&config, &Theme::light());
        let ids: Vec<_> = extras
            .iter()
            .map(|&(w, h, floating)| {
                let panel = Panel::new().with_minimum_size(Size::new(w, h));
                let panel = if floating { panel.top_level() } else { panel };
                layout.add_child(Box::new(panel))
            })
            .collect();

        let snapshot = |layout: &DialogLayout| {
            let mut rects = vec![
                layout.label().geometry(),
                layout.list().geometry(),
                layout.buttons().geometry(),
                layout.background().geometry(),
            ];
            rects.extend(DialogButton::ALL.iter().map(|b| layout.buttons().button(*b).geometry()));
            rects.extend(ids.iter().filter_map(|id| layout.child(*id)).map(|c| c.geometry()));
            rects
        };

        layout.layout(Size::new(width, height));
        let first = snapshot(&layout);
        layout.layout(Size::new(width, height));
        prop_assert_eq!(first, snapshot(&layout));
    }

    #[test]
    fn test_larger_child_never_shrinks_minimum(
        existing in prop::collection::vec((0.0f32..600.0, 0.0f32..600.0), 0..4),
        added in (0.0f32..1200.0, 0.0f32..1200.0),
    ) {
        let mut layout = DialogLayout::new(&DialogConfig::default(), &Theme::light());
        for (w, h) in existing {
            layout.add_child(Box::new(Panel::new().with_minimum_size(Size::new(w, h))));
        }
        let before = layout.minimum_content_size();

        layout.add_child(Box::new(Panel::new().with_minimum_size(Size::new(added.0, added.1))));
        let after = layout.minimum_content_size();

        prop_assert!(after.width >= before.width);
        prop_assert!(after.height >= before.height);
    }

    #[test]
    fn test_margin_contribution_is_exact(margin in 0u8..40, prompt in "[a-z]{0,80}") {
        let config = DialogConfig {
            prompt,
            min_size: Size::ZERO,
            ..DialogConfig::default()
        };
        let margin = f32::from(margin);
        let mut layout = DialogLayout::new(&config, &Theme::light().with_margin(margin));
        let with_margin = layout.minimum_content_size();

        layout.apply_theme(&Theme::light().with_margin(0.0));
        let without = layout.minimum_content_size();

        prop_assert_eq!(with_margin.width - without.width, margin * 2.0);
        prop_assert_eq!(with_margin.height - without.height, margin * 3.0);
    }
}

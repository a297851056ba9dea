#![forbid(unsafe_code)]

//! Whole-frame behaviour of the shell running the stock layout.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use slate_core::event::{CursorShape, KeyCode};
use slate_core::geometry::Rect;
use slate_core::input::FrameInput;
use slate_render::{DrawList, MonospaceMetrics};
use slate_runtime::{DefaultLayout, Shell, ShellConfig, StatusTicker, default_layout};
use slate_style::Theme;

// Stock layout at 1024x768 with default metrics:
//   menu bar y 0..22: File 0..48, Edit 48..96, Code 96..144
//   status editor x 0..200, divider band 198..=202
//   tab headers y 22..48: "Text editor" 200..336, "Blue" 336..402
//   main editor from (200, 48)
fn shell() -> (Shell, DefaultLayout) {
    let theme = Theme::default();
    let layout = default_layout(&theme.palette);
    let shell = Shell::new(
        ShellConfig::default().with_theme(theme),
        Box::new(MonospaceMetrics::default()),
        layout.tree.clone(),
        layout.root,
    )
    .unwrap();
    (shell, layout)
}

#[test]
fn hover_lost_fires_once_per_consumer_change() {
    let (mut shell, ids) = shell();

    let r = shell.update(&FrameInput::at(350, 30));
    assert_eq!(r.hover, Some(ids.tabs));
    assert_eq!(shell.tree().tabs(ids.tabs).unwrap().hovered(), Some(1));

    let r = shell.update(&FrameInput::at(500, 400));
    assert_eq!(r.hover, Some(ids.editor));
    assert_eq!(r.hover_lost, Some(ids.tabs));
    assert_eq!(shell.tree().tabs(ids.tabs).unwrap().hovered(), None);
    assert_eq!(r.cursor_shape, CursorShape::Text);

    let r = shell.update(&FrameInput::at(510, 410));
    assert_eq!(r.hover_lost, None);
}

#[test]
fn focus_lost_is_delivered_once() {
    let (mut shell, ids) = shell();

    shell.update(&FrameInput::at(500, 400).press_left());
    shell.update(&FrameInput::at(500, 400).release_left());
    let r = shell.update(&FrameInput::at(50, 400).press_left());
    assert_eq!(r.focus, Some(ids.status));
    assert_eq!(r.focus_lost, Some(ids.editor));
    assert!(!shell.tree().editor(ids.editor).unwrap().is_focused());

    let r = shell.update(&FrameInput::at(50, 400).release_left());
    assert_eq!(r.focus_lost, None);
}

#[test]
fn release_over_the_menu_bar_ends_the_drag() {
    let (mut shell, ids) = shell();
    let split = |shell: &Shell| shell.tree().splitter(ids.splitter).unwrap().split();

    let r = shell.update(&FrameInput::at(200, 300).press_left());
    assert_eq!(r.focus, Some(ids.splitter));
    assert_eq!(shell.tree().pointer_capture(), Some(ids.splitter));

    shell.update(&FrameInput::at(300, 300));
    assert_eq!(split(&shell), 300);

    // Crossing the menu strip keeps dragging.
    let r = shell.update(&FrameInput::at(400, 5));
    assert_eq!(r.hover, Some(ids.splitter));
    assert_eq!(split(&shell), 400);

    shell.update(&FrameInput::at(300, 10).release_left());
    assert_eq!(split(&shell), 300);
    assert!(!shell.tree().splitter(ids.splitter).unwrap().is_dragging());
    assert_eq!(shell.tree().pointer_capture(), None);

    let r = shell.update(&FrameInput::at(600, 300));
    assert_eq!(r.hover, Some(ids.editor));
    assert_eq!(split(&shell), 300);
}

#[test]
fn release_over_the_other_pane_ends_the_drag() {
    let (mut shell, ids) = shell();
    let split = |shell: &Shell| shell.tree().splitter(ids.splitter).unwrap().split();

    shell.update(&FrameInput::at(200, 300).press_left());
    shell.update(&FrameInput::at(700, 30));
    shell.update(&FrameInput::at(700, 400).release_left());
    assert_eq!(split(&shell), 700);
    assert!(!shell.tree().splitter(ids.splitter).unwrap().is_dragging());

    shell.update(&FrameInput::at(100, 400));
    assert_eq!(split(&shell), 700);
}

#[test]
fn short_window_keeps_children_inside_the_root() {
    let theme = Theme::default();
    let layout = default_layout(&theme.palette);
    let shell = Shell::new(
        ShellConfig::default().with_theme(theme).with_size(300, 10),
        Box::new(MonospaceMetrics::default()),
        layout.tree.clone(),
        layout.root,
    )
    .unwrap();
    let bar = shell.tree().menu_bar(layout.root).unwrap();
    let splitter = shell.tree().splitter(layout.splitter).unwrap();
    assert_eq!(bar.rect(), Rect::new(0, 0, 300, 10));
    assert!(bar.rect().contains_rect(&bar.bar_rect()));
    assert!(bar.rect().contains_rect(&splitter.rect()));
}

#[test]
fn posted_text_is_applied_at_the_start_of_the_next_frame() {
    let (mut shell, ids) = shell();
    let poster = shell.poster();

    assert!(poster.post(ids.status, "frame 1"));
    assert_eq!(shell.tree().editor(ids.status).unwrap().text(), "");
    shell.update(&FrameInput::default());
    assert_eq!(shell.tree().editor(ids.status).unwrap().text(), "frame 1");
}

#[test]
fn posted_text_lands_before_keys_are_delivered() {
    let (mut shell, ids) = shell();
    shell.update(&FrameInput::at(500, 400).press_left());

    shell.poster().post(ids.editor, "abc");
    shell.update(&FrameInput::at(500, 400).tap(KeyCode::End).typed("!"));
    assert_eq!(shell.tree().editor(ids.editor).unwrap().text(), "abc!");
}

#[test]
fn typing_reaches_the_clicked_editor() {
    let (mut shell, ids) = shell();
    shell.update(&FrameInput::at(500, 400).press_left());
    shell.update(&FrameInput::at(500, 400).typed("fn main() {}"));
    shell.update(&FrameInput::at(500, 400).tap(KeyCode::Enter));
    assert_eq!(shell.tree().editor(ids.editor).unwrap().text(), "fn main() {}\n");
}

#[test]
fn menu_activation_is_reported() {
    let (mut shell, _) = shell();
    shell.update(&FrameInput::at(10, 10).press_left());
    let save = shell.tree().menu_bar(shell.root()).unwrap().items()[0].item_rects()[0];
    let (x, y) = (save.x + 4, save.y + 4);
    shell.update(&FrameInput::at(x, y));
    let r = shell.update(&FrameInput::at(x, y).press_left());
    assert_eq!(r.activated, ["file.save"]);
    let r = shell.update(&FrameInput::at(x, y).release_left());
    assert!(r.activated.is_empty());
}

#[test]
fn resize_keeps_status_column_proportion() {
    let (mut shell, ids) = shell();
    shell.resize(2048, 768);
    assert_eq!(shell.tree().splitter(ids.splitter).unwrap().split(), 400);
    assert_eq!(shell.tree().editor(ids.status).unwrap().rect().width, 400);
}

#[test]
fn draw_shows_status_text_from_ticker() {
    let (mut shell, ids) = shell();
    let frames = shell.frame_counter();
    let ticker = StatusTicker::spawn(shell.poster(), ids.status, Duration::from_millis(1), move |_| {
        format!("frames: {}", frames.load(std::sync::atomic::Ordering::Relaxed))
    });

    let deadline = Instant::now() + Duration::from_secs(10);
    while shell.tree().editor(ids.status).unwrap().text().is_empty() && Instant::now() < deadline {
        shell.update(&FrameInput::default());
        std::thread::sleep(Duration::from_millis(1));
    }
    ticker.stop();

    let text = shell.tree().editor(ids.status).unwrap().text();
    assert!(text.starts_with("frames: "), "got {text:?}");
    let mut list = DrawList::new();
    shell.draw(&mut list);
    assert!(list.texts().contains(&text.as_str()));
}

proptest! {
    #[test]
    fn hover_lost_always_names_the_previous_consumer(
        points in prop::collection::vec((0i32..1024, 0i32..768), 1..40)
    ) {
        let (mut shell, _) = shell();
        let mut previous = None;
        for (x, y) in points {
            let r = shell.update(&FrameInput::at(x, y));
            if r.hover != previous {
                prop_assert_eq!(r.hover_lost, previous);
            } else {
                prop_assert_eq!(r.hover_lost, None);
            }
            previous = r.hover;
        }
    }
}

use std::io::Cursor;

use reprise_core::{
    COMPOSER, Callback, Scheduler, remember, render_count, reset_render_counts, signal,
};
use reprise_platform::{HeadlessApp, HeadlessConfig, run_headless_app};
use reprise_ui as ui;
use toggle_demo::{ALLOW_LABEL, App, Button, DEMO_TEXT, TITLE, TOGGLE_LABEL};

fn fresh() {
    COMPOSER.with(|c| c.borrow_mut().reset());
    reset_render_counts();
}

fn shows_text(app: &mut HeadlessApp) -> bool {
    app.frame().texts().contains(&DEMO_TEXT)
}

#[test]
fn initial_frame_has_title_and_buttons_only() {
    fresh();
    let mut app = HeadlessApp::new(App);
    let frame = app.frame();

    assert_eq!(frame.texts(), vec![TITLE]);
    let labels: Vec<&str> = frame.hit_regions.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec![ALLOW_LABEL, TOGGLE_LABEL]);
}

#[test]
fn toggle_before_allow_does_nothing() {
    fresh();
    let mut app = HeadlessApp::new(App);
    app.frame();

    for _ in 0..3 {
        assert!(!app.click_label(TOGGLE_LABEL).unwrap());
    }
    assert_eq!(app.compositions(), 1);
    assert!(!shows_text(&mut app));
}

#[test]
fn allow_then_toggle_walkthrough() {
    fresh();
    let mut app = HeadlessApp::new(App);

    assert!(!app.click_label(TOGGLE_LABEL).unwrap());
    assert!(!shows_text(&mut app));

    assert!(app.click_label(ALLOW_LABEL).unwrap());
    assert!(!shows_text(&mut app));

    assert!(app.click_label(TOGGLE_LABEL).unwrap());
    assert!(shows_text(&mut app));

    assert!(app.click_label(TOGGLE_LABEL).unwrap());
    assert!(!shows_text(&mut app));
}

#[test]
fn second_allow_click_does_not_recompose() {
    fresh();
    let mut app = HeadlessApp::new(App);
    assert!(app.click_label(ALLOW_LABEL).unwrap());
    assert!(!app.click_label(ALLOW_LABEL).unwrap());
    assert_eq!(app.compositions(), 2);
}

#[test]
fn memoized_children_skip_when_props_are_unchanged() {
    fresh();
    let mut app = HeadlessApp::new(App);
    app.frame();
    assert_eq!(render_count("DemoOutput"), 1);
    assert_eq!(render_count("Button:Allow Toggling"), 1);
    assert_eq!(render_count("Button:Toggle Paragraph!"), 1);

    // Latch flips: the toggle handler is rebuilt, DemoOutput's prop is not.
    app.click_label(ALLOW_LABEL).unwrap();
    assert_eq!(app.compositions(), 2);
    assert_eq!(render_count("DemoOutput"), 1);
    assert_eq!(render_count("Button:Allow Toggling"), 2);
    assert_eq!(render_count("Button:Toggle Paragraph!"), 2);

    // Content flips: the toggle handler is reused, so its button is skipped.
    app.click_label(TOGGLE_LABEL).unwrap();
    app.click_label(TOGGLE_LABEL).unwrap();
    assert_eq!(app.compositions(), 4);
    assert_eq!(render_count("DemoOutput"), 3);
    assert_eq!(render_count("Button:Allow Toggling"), 4);
    assert_eq!(render_count("Button:Toggle Paragraph!"), 2);
}

#[test]
fn buttons_with_the_same_label_are_memoized_separately() {
    fresh();
    let mut app = HeadlessApp::new(|_: &mut Scheduler| {
        let count = remember(|| signal(0u32));
        let first = remember(|| Callback::new(|| {}));
        let second = remember(|| Callback::new(|| {}));
        ui::Column().with_children(vec![
            ui::Text(format!("Count: {}", count.get())),
            Button("Same", (*first).clone()),
            Button("Same", (*second).clone()),
            ui::Button("Bump", {
                let count = (*count).clone();
                move || count.update(|c| *c += 1)
            }),
        ])
    });

    for _ in 0..3 {
        assert!(app.click_label("Bump").unwrap());
    }
    assert_eq!(app.compositions(), 4);
    assert!(app.frame().texts().contains(&"Count: 3"));
    // One run per instance, then skipped: neither button's props changed.
    assert_eq!(render_count("Button:Same"), 2);
}

#[test]
fn scripted_session() {
    fresh();
    let script = "\
click Toggle Paragraph!
click Allow Toggling
click Allow Toggling
click Toggle Paragraph!
click Toggle Paragraph!
stats
";
    let mut out = Vec::new();
    run_headless_app(App, HeadlessConfig::default(), Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    insta::assert_snapshot!(out.trim_end(), @r#"
    --- frame 1 (320x240) ---
    # Hi there!
    [ Allow Toggling ]
    [ Toggle Paragraph! ]
    ~ no change
    --- frame 2 (320x240) ---
    # Hi there!
    [ Allow Toggling ]
    [ Toggle Paragraph! ]
    ~ no change
    --- frame 3 (320x240) ---
    # Hi there!
    This is new!
    [ Allow Toggling ]
    [ Toggle Paragraph! ]
    --- frame 4 (320x240) ---
    # Hi there!
    [ Allow Toggling ]
    [ Toggle Paragraph! ]
    ~ compositions: 4
    ~ clicks: 5
    ~ renders Button:Allow Toggling: 4
    ~ renders Button:Toggle Paragraph!: 2
    ~ renders DemoOutput: 3
    "#);
}

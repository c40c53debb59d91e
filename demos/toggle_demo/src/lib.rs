#![allow(non_snake_case)]
//! A one-screen demo of re-execution and handler identity.
//!
//! `App` runs again whenever state it read changes. `DemoOutput` and each
//! `Button` are memoized: they only run again when their props change. The
//! "Toggle Paragraph!" handler comes from `remember_callback`, so its button
//! is skipped until the allow latch flips. The "Allow Toggling" handler is
//! rebuilt on every `App` run, so its button runs every time too.

pub mod components;
pub mod controller;

use reprise_core::{Scheduler, View};
use reprise_ui as ui;

pub use components::{Button, DEMO_TEXT, DemoOutput};
pub use controller::{ToggleController, remember_toggle_controller};

pub const TITLE: &str = "Hi there!";
pub const ALLOW_LABEL: &str = "Allow Toggling";
pub const TOGGLE_LABEL: &str = "Toggle Paragraph!";

pub fn App(_s: &mut Scheduler) -> View {
    log::info!("APP RUNNING");

    let controller = remember_toggle_controller();
    let toggle_paragraph = controller.toggle_content_handler();
    let allow_toggle = controller.enable_toggle_handler();

    ui::Column().with_children(vec![
        ui::Heading(TITLE),
        DemoOutput(controller.content_visible()),
        Button(ALLOW_LABEL, allow_toggle),
        Button(TOGGLE_LABEL, toggle_paragraph),
    ])
}

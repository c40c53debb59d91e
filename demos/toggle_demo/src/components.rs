use reprise_core::{Callback, View, memo};
use reprise_ui as ui;

pub const DEMO_TEXT: &str = "This is new!";

/// Shows [`DEMO_TEXT`] when `show` is set, nothing otherwise.
pub fn DemoOutput(show: bool) -> View {
    memo("DemoOutput", show, |show| {
        log::info!("DemoOutput RUNNING");
        if *show { ui::Text(DEMO_TEXT) } else { ui::Empty() }
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Callback,
}

/// A memoized button: skipped while it gets the same label and the same
/// handler handle as last time. Each call site is a separate instance; the
/// label only names its render counter.
pub fn Button(label: &str, on_click: Callback) -> View {
    let props = ButtonProps {
        label: label.to_string(),
        on_click,
    };
    memo(&format!("Button:{label}"), props, |p| {
        log::info!("Button RUNNING");
        ui::Button(p.label.clone(), p.on_click.clone())
    })
}

#![allow(non_snake_case)]
//! Widgets and layout.
//!
//! Layout is a single vertical flow: every view gets the full width minus
//! padding, stacked top to bottom. That is all the demo screens need.

use reprise_core::*;

pub const PADDING: f32 = 16.0;
pub const GAP: f32 = 8.0;
pub const BODY_FONT: f32 = 16.0;
pub const HEADING_FONT: f32 = 32.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

// Rough monospace advance, as a fraction of the font size.
const ADVANCE: f32 = 0.5;

pub fn Column() -> View {
    View::new(0, ViewKind::Column).semantics(Semantics::new(Role::Container))
}

pub fn Text(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Text {
            text: text.clone(),
            font_size: BODY_FONT,
        },
    )
    .semantics(Semantics::new(Role::Text).label(text))
}

pub fn Heading(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Text {
            text: text.clone(),
            font_size: HEADING_FONT,
        },
    )
    .semantics(Semantics::new(Role::Heading).label(text))
}

pub fn Button(text: impl Into<String>, on_click: impl Into<Callback>) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(on_click.into()),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

/// Placeholder for conditionally absent content.
pub fn Empty() -> View {
    View::new(0, ViewKind::Empty)
}

/// Measured text width in px.
pub fn measure_text(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * ADVANCE
}

/// Lays out `root` in a `size_px` surface and paints it.
///
/// Ids are stamped in pre-order starting at 1, `Empty` included, so a view
/// keeps its id while a sibling toggles between content and nothing.
pub fn layout_and_paint(root: &View, size_px: (u32, u32)) -> (Scene, Vec<HitRegion>, Vec<SemNode>) {
    let mut id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut id);

    let mut painter = Painter {
        // Surfaces narrower than the padding get zero-width content, not negative.
        width: (size_px.0 as f32 - PADDING * 2.0).max(0.0),
        y: PADDING,
        scene: Scene::default(),
        hits: Vec::new(),
        sems: Vec::new(),
    };
    painter.walk(&root, PADDING);

    if painter.y > size_px.1 as f32 {
        log::debug!(
            "layout overflows surface: content {}px, surface {}px",
            painter.y,
            size_px.1
        );
    }
    (painter.scene, painter.hits, painter.sems)
}

struct Painter {
    width: f32,
    y: f32,
    scene: Scene,
    hits: Vec<HitRegion>,
    sems: Vec<SemNode>,
}

impl Painter {
    fn walk(&mut self, v: &View, x: f32) {
        let top = self.y;
        match &v.kind {
            ViewKind::Empty => {}
            ViewKind::Column => {
                for (i, c) in v.children.iter().enumerate() {
                    if i > 0 && !matches!(c.kind, ViewKind::Empty) {
                        self.y += GAP;
                    }
                    self.walk(c, x);
                }
            }
            ViewKind::Text { text, font_size } => {
                let rect = Rect {
                    x,
                    y: top,
                    w: measure_text(text, *font_size).min(self.width),
                    h: font_size * 1.25,
                };
                self.scene.nodes.push(SceneNode::Text {
                    rect,
                    text: text.clone(),
                    size: *font_size,
                });
                self.y += rect.h;
            }
            ViewKind::Button { text, on_click } => {
                let enabled = v.semantics.as_ref().is_none_or(|s| s.enabled);
                let rect = Rect {
                    x,
                    y: top,
                    w: (measure_text(text, BODY_FONT) + 24.0).min(self.width),
                    h: BUTTON_HEIGHT,
                };
                self.scene.nodes.push(SceneNode::Button {
                    rect,
                    text: text.clone(),
                    enabled,
                });
                self.hits.push(HitRegion {
                    id: v.id,
                    rect,
                    label: text.clone(),
                    on_click: if enabled { on_click.clone() } else { None },
                });
                self.y += rect.h;
            }
        }

        if let Some(s) = &v.semantics {
            self.sems.push(SemNode {
                id: v.id,
                role: s.role,
                label: s.label.clone(),
                rect: Rect {
                    x,
                    y: top,
                    w: self.width,
                    h: self.y - top,
                },
                enabled: s.enabled,
            });
        }
    }
}

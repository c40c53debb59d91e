use crate::{Callback, Rect};

pub type ViewId = u64;

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Text { text: String, font_size: f32 },
    Button { text: String, on_click: Option<Callback> },
    /// Renders nothing. Keeps its place in the tree so sibling ids stay put.
    Empty,
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Empty => write!(f, "Empty"),
            ViewKind::Text { text, font_size } => f
                .debug_struct("Text")
                .field("text", text)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    /// 0 means "assign during layout".
    pub id: ViewId,
    pub kind: ViewKind,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            children: vec![],
            semantics: None,
        }
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    /// A disabled button still paints but takes no clicks. Views without
    /// semantics are unaffected.
    pub fn enabled(mut self, enabled: bool) -> Self {
        if let Some(s) = self.semantics.as_mut() {
            s.enabled = enabled;
        }
        self
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn texts(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Text { text, .. } => Some(text.as_str()),
                SceneNode::Button { .. } => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SceneNode {
    Text {
        rect: Rect,
        text: String,
        size: f32,
    },
    Button {
        rect: Rect,
        text: String,
        enabled: bool,
    },
}

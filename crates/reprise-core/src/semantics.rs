/// High‑level semantic role of a view, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Text,
    Heading,
    Button,
    Container,
}

/// Semantics attached to a `View`, carried into the frame's semantics nodes.
#[derive(Clone, Debug)]
pub struct Semantics {
    pub role: Role,
    /// Human‑readable label. For buttons, this is the “name” that is
    /// announced, and the name click commands address.
    pub label: Option<String>,
    /// Disabled nodes remain in the tree but are marked not enabled.
    pub enabled: bool,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            enabled: true,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

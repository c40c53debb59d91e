pub use crate::callback::{Callback, CallbackCache, remember_callback};
pub use crate::error::RuntimeError;
pub use crate::geometry::{Rect, Vec2};
pub use crate::memo::{memo, render_count, render_counts};
pub use crate::render_api::RenderBackend;
pub use crate::runtime::{
    ComposeGuard, Frame, HitRegion, Scheduler, SemNode, remember, remember_state,
    remember_state_with_key, remember_with_key,
};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Scene, SceneNode, View, ViewId, ViewKind};

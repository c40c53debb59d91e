//! # State, Signals, and Memoization
//!
//! Reprise is a small declarative UI runtime. A root component is a plain
//! function `fn(&mut Scheduler) -> View` that is executed again, top to
//! bottom, whenever state it read has changed. There are four pieces:
//!
//! - `Signal<T>` — observable, reactive value.
//! - `remember*` — storage bound to a composition slot, surviving re-runs.
//! - `remember_callback` — a handler whose identity is stable until its
//!   dependencies change.
//! - `memo` — a child component that is skipped when its props are equal.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use reprise_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Reads made while a `Scheduler` composes are tracked. Writing a tracked
//! signal marks the scheduler dirty, and the platform loop composes again.
//!
//! ## Remembered state
//!
//! ```rust,ignore
//! fn CounterView(_s: &mut Scheduler) -> View {
//!     let count = remember(|| signal(0));
//!     reprise_ui::Button(format!("Count = {}", count.get()), {
//!         let count = (*count).clone();
//!         move || count.update(|c| *c += 1)
//!     })
//! }
//! ```
//!
//! - `remember` and `remember_state` are order‑based: the Nth call in a
//!   composition group always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key‑based and
//!   stable across conditional branches.
//!
//! ## Handler identity
//!
//! Every run of a component builds fresh closures. `remember_callback`
//! returns the previously built `Callback` while its dependency value is
//! unchanged, so `Callback::ptr_eq` holds across runs:
//!
//! ```rust,ignore
//! let allow = allow_toggle.get();
//! let on_toggle = remember_callback(allow, move || {
//!     if allow {
//!         shown.update(|v| *v = !*v);
//!     }
//! });
//! ```
//!
//! ## Memoized components
//!
//! `memo(name, props, render)` re-executes `render` only when `props` differ
//! from that call site's last run. Handlers inside props compare by identity, which is
//! what makes `remember_callback` matter.

pub mod callback;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod prelude;
pub mod reactive;
pub mod render_api;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use callback::*;
pub use error::*;
pub use geometry::*;
pub use memo::*;
pub use prelude::*;
pub use render_api::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;

//! Memoized components.
//!
//! A component wrapped in [`memo`] only executes when its props differ from
//! the props it last ran with. Each call site is its own instance: the memo
//! takes a positional slot in the enclosing group, the way `remember` does, so
//! two instances with the same name and equal props never share an entry. Props that carry a [`Callback`](crate::Callback)
//! compare it by handle identity, so a parent that rebuilds its handlers on
//! every run defeats the memo, while one using `remember_callback` keeps it.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::reactive::{self, SignalId};
use crate::{View, remember_state, with_group};

thread_local! {
    static RENDER_COUNTS: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());
    static NEXT_INSTANCE: Cell<u64> = const { Cell::new(0) };
}

struct MemoSlot<P> {
    // Slot group for the component's own positional state.
    group: String,
    entry: Option<MemoEntry<P>>,
}

struct MemoEntry<P> {
    props: P,
    view: View,
    // Replayed on a skip so the enclosing composition keeps its dependencies.
    reads: HashSet<SignalId>,
}

/// Renders `render(&props)` unless this instance last ran with equal props,
/// in which case its previous `View` is returned.
///
/// The instance is identified by its position among the memos and
/// `remember`s of the enclosing component, not by `name`. `name` only labels
/// the render counter, which sums over every instance sharing it.
pub fn memo<P: PartialEq + 'static>(
    name: &str,
    props: P,
    render: impl FnOnce(&P) -> View,
) -> View {
    let slot = remember_state(|| MemoSlot::<P> {
        group: next_group(name),
        entry: None,
    });

    let group = {
        let slot = slot.borrow();
        if let Some(entry) = &slot.entry
            && entry.props == props
        {
            log::trace!("memo '{name}': props unchanged, skipping");
            for sig in &entry.reads {
                reactive::register_signal_read(*sig);
            }
            return entry.view.clone();
        }
        slot.group.clone()
    };

    // Not borrowed while rendering: `render` may memo its own children.
    let (view, reads) = with_group(&group, || reactive::record_reads(|| render(&props)));
    RENDER_COUNTS.with(|rc| *rc.borrow_mut().entry(name.to_string()).or_default() += 1);

    slot.borrow_mut().entry = Some(MemoEntry {
        props,
        view: view.clone(),
        reads,
    });
    view
}

fn next_group(name: &str) -> String {
    let n = NEXT_INSTANCE.with(|c| {
        let n = c.get();
        c.set(n + 1);
        n
    });
    format!("memo:{name}#{n}")
}

/// How many times memoized components named `name` have executed on this
/// thread.
pub fn render_count(name: &str) -> usize {
    RENDER_COUNTS.with(|rc| rc.borrow().get(name).copied().unwrap_or(0))
}

/// Every memoized component's execution count, sorted by name.
pub fn render_counts() -> Vec<(String, usize)> {
    let mut out: Vec<_> = RENDER_COUNTS.with(|rc| {
        rc.borrow()
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    });
    out.sort();
    out
}

pub fn reset_render_counts() {
    RENDER_COUNTS.with(|rc| rc.borrow_mut().clear());
}

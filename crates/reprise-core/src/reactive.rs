//! Dependency tracking between signals and observers.
//!
//! An observer is a notification closure. While an observer is *tracking*
//! (see [`track`]), every `Signal::get` records an edge from that signal to
//! the observer. A later write to the signal drops the observer's edges and
//! runs its closure once; the observer re-establishes its edges the next
//! time it tracks.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use slotmap::{SecondaryMap, SlotMap, new_key_type};

pub type SignalId = usize;

new_key_type! {
    pub struct ObserverId;
}

thread_local! {
    static CURRENT_OBSERVER: RefCell<Option<ObserverId>> = const { RefCell::new(None) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
    static READ_LOG: RefCell<Vec<HashSet<SignalId>>> = const { RefCell::new(Vec::new()) };
}

#[derive(Default)]
struct DepGraph {
    observers: SlotMap<ObserverId, Rc<dyn Fn()>>,
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, HashSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: SecondaryMap<ObserverId, HashSet<SignalId>>,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                    if set.is_empty() {
                        self.edges.remove(&s);
                    }
                }
            }
        }
    }

    fn remove_observer(&mut self, obs: ObserverId) {
        self.remove_all_edges_for(obs);
        self.observers.remove(obs);
    }
}

pub fn register_signal_read(sig: SignalId) {
    READ_LOG.with(|log| {
        if let Some(top) = log.borrow_mut().last_mut() {
            top.insert(sig);
        }
    });
    CURRENT_OBSERVER.with(|co| {
        if let Some(obs) = *co.borrow() {
            GRAPH.with(|g| {
                let mut g = g.borrow_mut();
                if !g.observers.contains_key(obs) {
                    return;
                }
                g.edges.entry(sig).or_default().insert(obs);
                if let Some(set) = g.back.entry(obs) {
                    set.or_default().insert(sig);
                }
            });
        }
    });
}

/// Notifies every observer that read `sig` since it last tracked.
pub fn signal_changed(sig: SignalId) {
    let pending: Vec<Rc<dyn Fn()>> = GRAPH.with(|gcell| {
        let mut g = gcell.borrow_mut();
        let Some(observers) = g.edges.get(&sig).cloned() else {
            return Vec::new();
        };
        observers
            .into_iter()
            .filter_map(|obs| {
                g.remove_all_edges_for(obs);
                g.observers.get(obs).cloned()
            })
            .collect()
    });
    if !pending.is_empty() {
        log::trace!("signal {sig} changed; notifying {} observer(s)", pending.len());
    }
    // The graph is not borrowed while observers run.
    for f in pending {
        f();
    }
}

pub fn new_observer(f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| g.borrow_mut().observers.insert(Rc::new(f)))
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    // May run during thread teardown, after the graph is gone.
    let _ = GRAPH.try_with(|g| g.borrow_mut().remove_observer(id));
}

/// Runs `f` with `id` as the tracking observer. Edges from a previous run are
/// dropped first.
pub fn track<R>(id: ObserverId, f: impl FnOnce() -> R) -> R {
    GRAPH.with(|g| g.borrow_mut().remove_all_edges_for(id));
    let prev = CURRENT_OBSERVER.with(|co| co.borrow_mut().replace(id));
    let out = f();
    CURRENT_OBSERVER.with(|co| *co.borrow_mut() = prev);
    out
}

/// Number of signals `id` currently depends on.
pub fn dependency_count(id: ObserverId) -> usize {
    GRAPH.with(|g| g.borrow().back.get(id).map_or(0, HashSet::len))
}

/// Runs `f` and returns the ids of every signal read during it. Nested logs
/// fold into the enclosing one.
pub fn record_reads<R>(f: impl FnOnce() -> R) -> (R, HashSet<SignalId>) {
    READ_LOG.with(|log| log.borrow_mut().push(HashSet::new()));
    let out = f();
    let reads = READ_LOG.with(|log| {
        let mut log = log.borrow_mut();
        let reads = log.pop().unwrap_or_default();
        if let Some(parent) = log.last_mut() {
            parent.extend(reads.iter().copied());
        }
        reads
    });
    (out, reads)
}

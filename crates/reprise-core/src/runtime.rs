use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::reactive::{self, ObserverId};
use crate::{Callback, Rect, Scene, Vec2, View, semantics::Role};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

const ROOT_GROUP: &str = "";

/// Slot storage that outlives a single composition.
///
/// Positional slots live in groups. The root component writes to the root
/// group; a memoized child gets its own group, so skipping it does not shift
/// the positions of the slots that follow.
#[derive(Default)]
pub struct Composer {
    groups: HashMap<String, SlotGroup>,
    stack: Vec<String>,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

#[derive(Default)]
struct SlotGroup {
    slots: Vec<Option<Box<dyn Any>>>,
    cursor: usize,
}

impl Composer {
    fn current_group(&mut self) -> &mut SlotGroup {
        let key = self.stack.last().map_or(ROOT_GROUP, String::as_str);
        self.groups.entry(key.to_string()).or_default()
    }

    /// Drops every slot. Used by tests that share a thread.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.stack.clear();
        self.keyed_slots.clear();
    }
}

/// Runs `f` with positional slots scoped to the group `key`. The root group
/// is `""`; `memo` groups are named `memo:<name>#<n>`.
pub fn with_group<R>(key: &str, f: impl FnOnce() -> R) -> R {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.stack.push(key.to_string());
        c.current_group().cursor = 0;
    });
    let out = f();
    COMPOSER.with(|c| {
        c.borrow_mut().stack.pop();
    });
    out
}

pub struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.stack.clear();
            c.current_group().cursor = 0;
        });
        ComposeGuard { _private: () }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            if !c.stack.is_empty() {
                log::warn!("composition ended with {} open group(s)", c.stack.len());
                c.stack.clear();
            }
        });
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let (cursor, existing, mismatched) = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let g = c.current_group();
        let cursor = g.cursor;
        g.cursor += 1;
        match g.slots.get(cursor).and_then(Option::as_ref) {
            Some(slot) => match slot.downcast_ref::<Rc<T>>() {
                Some(rc) => (cursor, Some(rc.clone()), false),
                None => (cursor, None, true),
            },
            None => (cursor, None, false),
        }
    });

    if let Some(rc) = existing {
        return rc;
    }
    if mismatched {
        log::warn!(
            "remember: slot {} type changed; replacing. \
             If this is due to conditional composition, prefer remember_with_key.",
            cursor
        );
    }

    // `init` may itself remember, so the composer is not borrowed here.
    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let g = c.current_group();
        if g.slots.len() <= cursor {
            g.slots.resize_with(cursor + 1, || None);
        }
        g.slots[cursor] = Some(Box::new(rc.clone()));
    });
    rc
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        let slot = c.keyed_slots.get(&key)?;
        let rc = slot.downcast_ref::<Rc<T>>().cloned();
        if rc.is_none() {
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }
        rc
    });
    if let Some(rc) = existing {
        return rc;
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone()));
    });
    rc
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Frame — output of composition for a tick: scene + input/semantics.
#[derive(Clone, Debug)]
pub struct Frame {
    /// 1-based composition number that produced this frame.
    pub number: u64,
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
}

impl Frame {
    pub fn hit_region(&self, id: u64) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.id == id)
    }

    pub fn hit_region_by_label(&self, label: &str) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.label == label)
    }

    /// Topmost region under `p`. Later regions paint over earlier ones.
    pub fn hit_test(&self, p: Vec2) -> Option<&HitRegion> {
        self.hit_regions.iter().rev().find(|h| h.rect.contains(p))
    }

    /// All text drawn into the scene, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.scene.texts()
    }
}

#[derive(Clone, Debug)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub label: String,
    pub on_click: Option<Callback>,
}

/// Flattened semantics node produced by `layout_and_paint`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
    pub enabled: bool,
}

/// Drives compositions and knows when the last one went stale.
///
/// Every composition runs under one tracking observer. A write to any signal
/// read during the composition marks the scheduler dirty; the platform loop
/// then composes again.
pub struct Scheduler {
    observer: ObserverId,
    dirty: Rc<Cell<bool>>,
    compositions: u64,
    pub size: (u32, u32),
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        let dirty = Rc::new(Cell::new(true));
        let observer = reactive::new_observer({
            let dirty = dirty.clone();
            move || dirty.set(true)
        });
        Self {
            observer,
            dirty,
            compositions: 0,
            size: (320, 240),
        }
    }

    /// True before the first composition and after any tracked signal write.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn compositions(&self) -> u64 {
        self.compositions
    }

    /// Signals read by the last composition.
    pub fn dependency_count(&self) -> usize {
        reactive::dependency_count(self.observer)
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        layout_paint: impl Fn(&View, (u32, u32)) -> (Scene, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        // Cleared before building, so a write during the build leaves it set.
        self.dirty.set(false);
        let root = {
            let _guard = ComposeGuard::begin();
            let observer = self.observer;
            reactive::track(observer, || build_root(self))
        };
        self.compositions += 1;
        log::debug!(
            "composition {} read {} signal(s)",
            self.compositions,
            self.dependency_count()
        );

        let (scene, hit_regions, semantics_nodes) = layout_paint(&root, self.size);
        Frame {
            number: self.compositions,
            scene,
            hit_regions,
            semantics_nodes,
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        reactive::remove_observer(self.observer);
    }
}

use std::fmt;
use std::rc::Rc;

use crate::remember_state;

/// A shareable `Fn()` handle.
///
/// Equality is handle identity: two `Callback`s are equal only when they are
/// clones of the same allocation. Memoized components rely on this to skip
/// work when a parent hands them the same handler again.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }

    pub fn ptr_eq(a: &Callback, b: &Callback) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&a.0), Rc::as_ptr(&b.0))
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Callback::ptr_eq(self, other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Callback::new(f)
    }
}

/// Last dependency value plus the handler built for it.
pub struct CallbackCache<D> {
    deps: Option<D>,
    callback: Option<Callback>,
    builds: usize,
}

impl<D> Default for CallbackCache<D> {
    fn default() -> Self {
        Self {
            deps: None,
            callback: None,
            builds: 0,
        }
    }
}

impl<D: PartialEq> CallbackCache<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached handler when `deps` equals the stored dependencies,
    /// otherwise wraps `f`, stores it under `deps` and returns it.
    pub fn get(&mut self, deps: D, f: impl Fn() + 'static) -> Callback {
        if let (Some(prev), Some(cb)) = (&self.deps, &self.callback)
            && *prev == deps
        {
            return cb.clone();
        }
        let cb = Callback::new(f);
        self.deps = Some(deps);
        self.callback = Some(cb.clone());
        self.builds += 1;
        cb
    }

    /// How many distinct handlers this cache has produced.
    pub fn builds(&self) -> usize {
        self.builds
    }
}

/// Memoized handler for the current composition slot.
///
/// The returned `Callback` is the same handle on every recomposition until
/// `deps` compares unequal to the value it was last built with.
pub fn remember_callback<D: PartialEq + 'static>(deps: D, f: impl Fn() + 'static) -> Callback {
    let cache = remember_state(CallbackCache::<D>::new);
    let mut cache = cache.borrow_mut();
    let before = cache.builds();
    let cb = cache.get(deps, f);
    if cache.builds() != before {
        log::debug!("remember_callback: dependencies changed; new handler {cb:?}");
    }
    cb
}

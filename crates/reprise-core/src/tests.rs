#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::COMPOSER;
    use crate::Rect;
    use crate::Vec2;
    use crate::callback::*;
    use crate::memo::*;
    use crate::runtime::*;
    use crate::signal::*;
    use crate::view::*;

    fn fresh() {
        COMPOSER.with(|c| c.borrow_mut().reset());
        reset_render_counts();
    }

    fn no_paint(_: &View, _: (u32, u32)) -> (Scene, Vec<HitRegion>, Vec<SemNode>) {
        (Scene::default(), vec![], vec![])
    }

    // One composition pass without a scheduler: positional cursors restart.
    fn pass<R>(f: impl FnOnce() -> R) -> R {
        let _guard = ComposeGuard::begin();
        f()
    }

    fn text(s: &str) -> View {
        View::new(
            0,
            ViewKind::Text {
                text: s.to_string(),
                font_size: 16.0,
            },
        )
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_set_if_changed_skips_equal_values() {
        let sig = signal(false);
        let hits = Rc::new(Cell::new(0));
        sig.subscribe({
            let hits = hits.clone();
            move |_| hits.set(hits.get() + 1)
        });

        assert!(sig.set_if_changed(true));
        assert!(!sig.set_if_changed(true));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_key_based_remember() {
        fresh();

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Should return the same instance
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // Not 100, because key exists
    }

    #[test]
    fn test_positional_remember_survives_recomposition() {
        fresh();
        let mut sched = Scheduler::new();
        let seen: Rc<RefCell<Vec<Rc<Signal<i32>>>>> = Rc::default();

        for _ in 0..2 {
            let seen = seen.clone();
            sched.compose(
                move |_| {
                    let a = remember(|| signal(1));
                    let _b = remember(|| signal(2));
                    seen.borrow_mut().push(a);
                    text("x")
                },
                no_paint,
            );
        }

        let seen = seen.borrow();
        assert!(Rc::ptr_eq(&seen[0], &seen[1]));
    }

    #[test]
    fn test_scheduler_dirty_only_on_tracked_writes() {
        fresh();
        let tracked = signal(0);
        let untracked = signal(0);
        let mut sched = Scheduler::new();
        assert!(sched.is_dirty());

        let frame = sched.compose(
            {
                let tracked = tracked.clone();
                move |_| text(&tracked.get().to_string())
            },
            no_paint,
        );
        assert_eq!(frame.number, 1);
        assert!(!sched.is_dirty());
        assert_eq!(sched.dependency_count(), 1);

        untracked.set(5);
        assert!(!sched.is_dirty());

        tracked.set(1);
        assert!(sched.is_dirty());
    }

    #[test]
    fn test_callback_cache_rebuilds_on_dep_change() {
        let mut cache = CallbackCache::new();
        let a = cache.get(false, || {});
        let b = cache.get(false, || {});
        assert_eq!(a, b);

        let c = cache.get(true, || {});
        assert_ne!(b, c);
        let d = cache.get(true, || {});
        assert!(Callback::ptr_eq(&c, &d));
        assert_eq!(cache.builds(), 2);
    }

    #[test]
    fn test_remember_callback_identity_across_compositions() {
        fresh();
        let dep = signal(0u8);
        let handlers: Rc<RefCell<Vec<Callback>>> = Rc::default();
        let mut sched = Scheduler::new();

        let mut root = {
            let dep = dep.clone();
            let handlers = handlers.clone();
            move |_: &mut Scheduler| {
                let d = dep.get();
                handlers.borrow_mut().push(remember_callback(d, || {}));
                text("x")
            }
        };

        sched.compose(&mut root, no_paint);
        sched.compose(&mut root, no_paint);
        dep.set(1);
        sched.compose(&mut root, no_paint);
        dep.set(1);
        sched.compose(&mut root, no_paint);

        let h = handlers.borrow();
        assert_eq!(h[0], h[1]);
        assert_ne!(h[1], h[2]);
        assert_eq!(h[2], h[3]);
    }

    #[test]
    fn test_memo_skips_equal_props() {
        fresh();
        let first = pass(|| memo("child", 1u32, |n| text(&n.to_string())));
        let second = pass(|| memo("child", 1u32, |_| text("never")));
        let third = pass(|| memo("child", 2u32, |n| text(&n.to_string())));

        assert_eq!(render_count("child"), 2);
        assert!(matches!(second.kind, ViewKind::Text { text: ref t, .. } if t == "1"));
        assert!(matches!(first.kind, ViewKind::Text { text: ref t, .. } if t == "1"));
        assert!(matches!(third.kind, ViewKind::Text { text: ref t, .. } if t == "2"));
    }

    #[test]
    fn test_memo_compares_callbacks_by_identity() {
        fresh();
        let stable = Callback::new(|| {});
        pass(|| memo("button", stable.clone(), |_| text("b")));
        pass(|| memo("button", stable.clone(), |_| text("b")));
        assert_eq!(render_count("button"), 1);

        pass(|| memo("button", Callback::new(|| {}), |_| text("b")));
        assert_eq!(render_count("button"), 2);
    }

    #[test]
    fn test_memo_instances_sharing_a_name_are_separate() {
        fresh();
        let a = Callback::new(|| {});
        let b = Callback::new(|| {});
        for _ in 0..3 {
            pass(|| {
                memo("twin", a.clone(), |_| text("a"));
                memo("twin", b.clone(), |_| text("b"));
            });
        }
        assert_eq!(render_count("twin"), 2);

        let views = pass(|| {
            (
                memo("twin", a.clone(), |_| text("never")),
                memo("twin", b.clone(), |_| text("never")),
            )
        });
        assert!(matches!(views.0.kind, ViewKind::Text { text: ref t, .. } if t == "a"));
        assert!(matches!(views.1.kind, ViewKind::Text { text: ref t, .. } if t == "b"));
    }

    #[test]
    fn test_memo_with_empty_name_keeps_root_slots() {
        fresh();
        let seen: Rc<RefCell<Vec<(Rc<Cell<u8>>, Rc<Cell<u8>>)>>> = Rc::default();
        for n in 0..2u8 {
            pass(|| {
                let before = remember(|| Cell::new(1u8));
                memo("", n, |_| {
                    let _inner = remember(|| 0u64);
                    text("x")
                });
                let after = remember(|| Cell::new(2u8));
                seen.borrow_mut().push((before, after));
            });
        }

        let seen = seen.borrow();
        assert!(Rc::ptr_eq(&seen[0].0, &seen[1].0));
        assert!(Rc::ptr_eq(&seen[0].1, &seen[1].1));
        assert_eq!(seen[1].1.get(), 2);
    }

    #[test]
    fn test_skipped_memo_keeps_its_dependencies() {
        fresh();
        let inner = signal(String::from("a"));
        let mut sched = Scheduler::new();
        let mut root = {
            let inner = inner.clone();
            move |_: &mut Scheduler| {
                let inner = inner.clone();
                memo("reader", (), move |_| text(&inner.get()))
            }
        };

        sched.compose(&mut root, no_paint);
        sched.compose(&mut root, no_paint);
        assert_eq!(render_count("reader"), 1);
        assert!(!sched.is_dirty());

        inner.set("b".into());
        assert!(sched.is_dirty());
    }

    #[test]
    fn test_memo_groups_isolate_positional_slots() {
        fresh();
        let flag = signal(true);
        let mut sched = Scheduler::new();
        let after: Rc<RefCell<Vec<Rc<Cell<u8>>>>> = Rc::default();
        let mut root = {
            let flag = flag.clone();
            let after = after.clone();
            move |_: &mut Scheduler| {
                let on = flag.get();
                let child = memo("kid", on, |_| {
                    let _own = remember(|| 0u64);
                    text("kid")
                });
                after.borrow_mut().push(remember(|| Cell::new(7u8)));
                child
            }
        };

        sched.compose(&mut root, no_paint);
        // Same props: the child and its slot are skipped.
        sched.compose(&mut root, no_paint);
        flag.set(false);
        sched.compose(&mut root, no_paint);

        let after = after.borrow();
        assert!(Rc::ptr_eq(&after[0], &after[1]));
        assert!(Rc::ptr_eq(&after[1], &after[2]));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }
}

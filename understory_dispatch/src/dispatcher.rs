// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher implementation.
//!
//! ## Overview
//!
//! Holds one handler per key and delivers each pointer event to every key
//! whose geometry contains the event position.
//!
//! ## Delivery rules
//!
//! - Handlers run in registration order. Replacing a handler keeps the key's
//!   original position.
//! - Every hit key receives the event. There is no consumption, no
//!   stop-propagation, and no z-order priority: two overlapping views both see
//!   a press, the earlier-registered one first.
//! - Hit testing is delegated to a [`HitTest`] source, which should answer
//!   from the geometry of the last draw.
//!
//! ## See Also
//!
//! [`hover`](crate::hover) for enter/leave transitions derived from
//! [`Dispatcher::hits`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;
use kurbo::Point;

use crate::types::{HitTest, PointerEvent};

/// A registered event handler.
pub type Handler = Box<dyn FnMut(&PointerEvent)>;

/// Routes pointer events to the handlers of every key under the pointer.
///
/// ## Usage
///
/// - [`Dispatcher::register`] a handler per view key.
/// - Draw the frame so the hit-test source has current geometry.
/// - Call [`Dispatcher::dispatch`] for each input event.
pub struct Dispatcher<K> {
    handlers: IndexMap<K, Handler, DefaultHashBuilder>,
}

impl<K: Debug> Debug for Dispatcher<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("keys", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<K> Default for Dispatcher<K> {
    fn default() -> Self {
        Self {
            handlers: IndexMap::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<K: Hash + Eq + Debug> Dispatcher<K> {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `key`.
    ///
    /// If `key` already had a handler it is replaced in place (keeping the
    /// key's delivery position) and the previous handler is returned.
    pub fn register(
        &mut self,
        key: K,
        handler: impl FnMut(&PointerEvent) + 'static,
    ) -> Option<Handler> {
        tracing::debug!(?key, "register handler");
        self.handlers.insert(key, Box::new(handler))
    }

    /// Remove the handler for `key`, preserving the order of the others.
    pub fn unregister(&mut self, key: &K) -> Option<Handler> {
        tracing::debug!(?key, "unregister handler");
        self.handlers.shift_remove(key)
    }

    /// Returns `true` if `key` has a handler.
    pub fn is_registered(&self, key: &K) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered keys in delivery order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.handlers.keys()
    }

    /// Registered keys whose geometry contains `pt`, in delivery order.
    pub fn hits(&self, pt: Point, source: &(impl HitTest<K> + ?Sized)) -> Vec<K>
    where
        K: Clone,
    {
        self.handlers
            .keys()
            .filter(|key| source.is_intersect(key, pt))
            .cloned()
            .collect()
    }

    /// Deliver `event` to every registered key that contains its position.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(
        &mut self,
        event: &PointerEvent,
        source: &(impl HitTest<K> + ?Sized),
    ) -> usize {
        let mut delivered = 0;
        for (key, handler) in &mut self.handlers {
            if source.is_intersect(key, event.pos) {
                tracing::trace!(?key, kind = ?event.kind, "dispatch hit");
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointerKind;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use hashbrown::HashMap;
    use kurbo::Rect;

    /// Hit source over plain rectangles, edge-inclusive like views.
    #[derive(Default)]
    struct Rects(HashMap<u32, Rect>);

    impl Rects {
        fn with(mut self, key: u32, rect: Rect) -> Self {
            self.0.insert(key, rect);
            self
        }
    }

    impl HitTest<u32> for Rects {
        fn is_intersect(&self, key: &u32, pt: Point) -> bool {
            self.0.get(key).is_some_and(|r| {
                pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
            })
        }
    }

    type Log = Rc<RefCell<Vec<(u32, PointerKind)>>>;

    fn recorder(log: &Log, key: u32) -> impl FnMut(&PointerEvent) + 'static {
        let log = log.clone();
        move |e: &PointerEvent| log.borrow_mut().push((key, e.kind))
    }

    #[test]
    fn overlapping_views_both_receive_press_in_registration_order() {
        let rects = Rects::default()
            .with(2, Rect::new(0.0, 0.0, 50.0, 50.0))
            .with(1, Rect::new(25.0, 25.0, 75.0, 75.0));
        let log: Log = Rc::default();
        let mut d: Dispatcher<u32> = Dispatcher::new();
        // Register the later-drawn view first: order follows registration.
        d.register(2, recorder(&log, 2));
        d.register(1, recorder(&log, 1));

        let n = d.dispatch(&PointerEvent::press((30.0, 30.0)), &rects);
        assert_eq!(n, 2);
        assert_eq!(
            *log.borrow(),
            vec![(2, PointerKind::Press), (1, PointerKind::Press)]
        );
    }

    #[test]
    fn misses_and_unknown_keys_are_skipped() {
        let rects = Rects::default().with(1, Rect::new(0.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        let mut d: Dispatcher<u32> = Dispatcher::new();
        d.register(1, recorder(&log, 1));
        d.register(9, recorder(&log, 9));

        assert_eq!(d.dispatch(&PointerEvent::move_to((20.0, 20.0)), &rects), 0);
        assert_eq!(d.dispatch(&PointerEvent::release((10.0, 10.0)), &rects), 1);
        assert_eq!(*log.borrow(), vec![(1, PointerKind::Release)]);
    }

    #[test]
    fn replacing_a_handler_keeps_its_position() {
        let rects = Rects::default()
            .with(1, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with(2, Rect::new(0.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        let mut d: Dispatcher<u32> = Dispatcher::new();
        assert!(d.register(1, recorder(&log, 1)).is_none());
        d.register(2, recorder(&log, 2));
        assert!(d.register(1, recorder(&log, 100)).is_some());
        assert_eq!(d.len(), 2);

        d.dispatch(&PointerEvent::press((5.0, 5.0)), &rects);
        assert_eq!(
            *log.borrow(),
            vec![(100, PointerKind::Press), (2, PointerKind::Press)]
        );
    }

    #[test]
    fn unregister_preserves_remaining_order() {
        let rects = Rects::default()
            .with(1, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with(2, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut d: Dispatcher<u32> = Dispatcher::new();
        for k in 1..=3 {
            d.register(k, |_: &PointerEvent| {});
        }
        assert!(d.unregister(&2).is_some());
        assert!(d.unregister(&2).is_none());
        assert!(!d.is_registered(&2));
        assert_eq!(d.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(d.hits(Point::new(1.0, 1.0), &rects), vec![1, 3]);
    }

    #[test]
    fn empty_dispatcher_delivers_nothing() {
        let mut d: Dispatcher<u32> = Dispatcher::new();
        assert!(d.is_empty());
        let n = d.dispatch(&PointerEvent::press((0.0, 0.0)), &Rects::default());
        assert_eq!(n, 0);
    }
}

//! One-shot, staggered reveal of elements as they scroll into view.

use crate::constants::{CLASS_VISIBLE, STAGGER_CLASSES};
use crate::schedule::Scheduler;
use crate::surface::Surface;
use fnv::FnvHashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Zero-based position of `target` among the `siblings` that carry one of the
/// animated classes. Siblings failing `is_animated` are skipped entirely.
pub fn sibling_index<T, I, F>(siblings: I, target: &T, is_animated: F) -> Option<usize>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    siblings
        .into_iter()
        .filter(|s| is_animated(s))
        .position(|s| s == *target)
}

/// True if any of `classes` puts the element in a stagger sibling set.
pub fn in_stagger_set<'a>(mut classes: impl Iterator<Item = &'a str>) -> bool {
    classes.any(|c| STAGGER_CLASSES.contains(&c))
}

/// Elements missing from their sibling set start without delay.
#[inline]
pub fn stagger_delay_ms(index: Option<usize>, step_ms: u32) -> u32 {
    index.map_or(0, |i| {
        u32::try_from(i)
            .unwrap_or(u32::MAX)
            .saturating_mul(step_ms)
    })
}

/// Remembers which elements have already been triggered.
///
/// A key is latched the first time it is triggered and never released, so
/// repeated intersections of the same element are ignored.
pub struct RevealTracker<K> {
    triggered: FnvHashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            triggered: FnvHashSet::default(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_triggered(&self, key: &K) -> bool {
        self.triggered.contains(key)
    }

    pub fn triggered_count(&self) -> usize {
        self.triggered.len()
    }

    /// Every one of `total` keys has been latched.
    pub fn is_complete(&self, total: usize) -> bool {
        self.triggered.len() >= total
    }

    /// Latch `key` and schedule the visible marker on `element` after
    /// `delay_ms`. Returns `false` without scheduling if `key` was already
    /// latched.
    pub fn trigger<E>(
        &mut self,
        key: K,
        element: Rc<E>,
        delay_ms: u32,
        scheduler: &impl Scheduler,
    ) -> bool
    where
        E: Surface + 'static,
    {
        if !self.triggered.insert(key) {
            return false;
        }
        log::trace!("[reveal] marking visible in {}ms", delay_ms);
        scheduler.schedule(
            delay_ms,
            Box::new(move || element.add_class(CLASS_VISIBLE)),
        );
        true
    }
}

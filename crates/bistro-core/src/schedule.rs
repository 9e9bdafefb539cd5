//! Deferred-callback seam.
//!
//! Every delay in the site behaviors (throttle windows, reveal stagger, touch
//! release) goes through [`Scheduler`]. Tasks are fire-and-forget: there is no
//! handle and no cancellation, so anything scheduled must be harmless to run
//! after its effect is already in place.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once, no sooner than `delay_ms` from now.
    fn schedule(&self, delay_ms: u32, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Task) {
        (**self).schedule(delay_ms, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, delay_ms: u32, task: Task) {
        (**self).schedule(delay_ms, task)
    }
}

struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Scheduler driven by a virtual millisecond clock.
///
/// Nothing runs until [`VirtualScheduler::advance`] moves the clock. Tasks
/// run in due-time order (FIFO for equal due times); tasks scheduled while
/// advancing are picked up in the same call if they fall due.
#[derive(Default)]
pub struct VirtualScheduler {
    now_ms: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.now_ms.set(target);
    }

    fn pop_due(&self, limit_ms: u64) -> Option<Task> {
        let mut queue = self.queue.borrow_mut();
        let idx = queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= limit_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        let next = queue.swap_remove(idx);
        // Tasks observe the clock at their own due time.
        self.now_ms.set(next.due_ms.max(self.now_ms.get()));
        Some(next.task)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending {
            due_ms: self.now_ms.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

use crate::schedule::Scheduler;
use std::cell::Cell;
use std::rc::Rc;

/// Wrap `handler` so it runs at most once per `interval_ms`.
///
/// The first call in a burst runs immediately and opens a suppression window;
/// calls landing inside the window are dropped, not queued. Each wrapper owns
/// its own flag, so two throttled handlers never interfere.
pub fn throttle<A, F, S>(mut handler: F, interval_ms: u32, scheduler: S) -> impl FnMut(A)
where
    F: FnMut(A),
    S: Scheduler,
{
    let suppressed = Rc::new(Cell::new(false));
    move |arg: A| {
        if suppressed.get() {
            return;
        }
        handler(arg);
        suppressed.set(true);
        let flag = suppressed.clone();
        scheduler.schedule(interval_ms, Box::new(move || flag.set(false)));
    }
}

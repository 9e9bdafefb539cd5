use crate::constants::{CLASS_TOUCHED, CLASS_TOUCH_DEVICE};
use crate::schedule::Scheduler;
use crate::surface::Surface;
use std::rc::Rc;

pub fn mark_device(body: &impl Surface) {
    body.add_class(CLASS_TOUCH_DEVICE);
}

pub fn press(card: &impl Surface) {
    card.add_class(CLASS_TOUCHED);
}

/// Drop the touched marker after `delay_ms`. Overlapping releases from rapid
/// taps each remove the class; removal of an absent class is a no-op.
pub fn release<E>(card: Rc<E>, delay_ms: u32, scheduler: &impl Scheduler)
where
    E: Surface + 'static,
{
    scheduler.schedule(delay_ms, Box::new(move || card.remove_class(CLASS_TOUCHED)));
}

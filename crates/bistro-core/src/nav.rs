use crate::constants::CLASS_SCROLLED;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Plain,
    Scrolled,
}

impl NavState {
    /// `Scrolled` strictly above the threshold; exactly at it is still `Plain`.
    #[inline]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavState::Scrolled
        } else {
            NavState::Plain
        }
    }
}

/// Bring the nav element's class in line with the current scroll offset.
pub fn apply(nav: &impl Surface, scroll_y: f64, threshold: f64) -> NavState {
    let state = NavState::for_scroll(scroll_y, threshold);
    match state {
        NavState::Scrolled => nav.add_class(CLASS_SCROLLED),
        NavState::Plain => nav.remove_class(CLASS_SCROLLED),
    }
    state
}

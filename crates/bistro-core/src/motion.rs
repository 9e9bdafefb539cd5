use crate::config::MotionConfig;
use crate::constants::{TRANSITION_DISABLED, TRANSITION_SLOW_VAR, TRANSITION_SMOOTH_VAR};
use crate::surface::Surface;

/// Transition variables to write for the given visibility.
pub fn transition_vars(hidden: bool, cfg: &MotionConfig) -> [(&'static str, &str); 2] {
    if hidden {
        [
            (TRANSITION_SMOOTH_VAR, TRANSITION_DISABLED),
            (TRANSITION_SLOW_VAR, TRANSITION_DISABLED),
        ]
    } else {
        [
            (TRANSITION_SMOOTH_VAR, cfg.smooth.as_str()),
            (TRANSITION_SLOW_VAR, cfg.slow.as_str()),
        ]
    }
}

pub fn apply(body: &impl Surface, hidden: bool, cfg: &MotionConfig) {
    for (name, value) in transition_vars(hidden, cfg) {
        body.set_style(name, value);
    }
}

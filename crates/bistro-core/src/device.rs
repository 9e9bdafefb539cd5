/// Input branch chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceMode {
    Touch,
    Pointer,
}

impl DeviceMode {
    /// Touch-capable if the environment exposes touch events or reports any
    /// touch points.
    pub fn detect(has_touch_events: bool, max_touch_points: i32) -> Self {
        if has_touch_events || max_touch_points > 0 {
            DeviceMode::Touch
        } else {
            DeviceMode::Pointer
        }
    }

    /// Hover-driven effects (parallax, card glow) only run without touch.
    #[inline]
    pub fn supports_hover(self) -> bool {
        self == DeviceMode::Pointer
    }

    #[inline]
    pub fn is_touch(self) -> bool {
        self == DeviceMode::Touch
    }
}

use glam::DVec2;

/// Axis-aligned box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position relative to the box, as fractions of its size.
    /// Not clamped: a pointer outside the box yields values outside [0, 1].
    #[inline]
    pub fn fraction_of(&self, pointer: DVec2) -> DVec2 {
        DVec2::new(
            (pointer.x - self.left) / self.width,
            (pointer.y - self.top) / self.height,
        )
    }
}

/// Vertical extent of an element's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub bottom: f64,
}

/// Partial-visibility predicate: the element's top has crossed the line at
/// `window_height * (1 - offset)` and its bottom has not scrolled above the
/// viewport. `offset` is a fraction of the window height.
#[inline]
pub fn is_in_viewport(span: VerticalSpan, window_height: f64, offset: f64) -> bool {
    span.top <= window_height * (1.0 - offset) && span.bottom >= 0.0
}

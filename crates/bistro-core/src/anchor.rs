/// Element id targeted by a same-page link, if any.
///
/// Only hrefs starting with `#` qualify; a bare `#` names nothing.
#[inline]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll offset that lands the target just below the fixed nav bar.
#[inline]
pub fn scroll_destination(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height
}

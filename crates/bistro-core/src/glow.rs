//! Proximity glow: publishes the pointer position inside a card as two
//! percentage custom properties. Rendering the glow is left to the stylesheet.

use crate::constants::{GLOW_X_VAR, GLOW_Y_VAR};
use crate::geometry::Rect;
use crate::surface::Surface;
use glam::DVec2;

/// Pointer position as a percentage of the card size. Values are left
/// unclamped; the stylesheet may rely on overflow at the edges.
/// `None` when the card has no area.
#[inline]
pub fn glow_percent(pointer: DVec2, card: Rect) -> Option<DVec2> {
    card.has_area().then(|| card.fraction_of(pointer) * 100.0)
}

pub fn apply(card: &impl Surface, pointer: DVec2, rect: Rect) {
    if let Some(pct) = glow_percent(pointer, rect) {
        card.set_style(GLOW_X_VAR, &format!("{}%", pct.x));
        card.set_style(GLOW_Y_VAR, &format!("{}%", pct.y));
    }
}

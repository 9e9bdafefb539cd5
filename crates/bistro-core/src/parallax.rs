//! Hero image offset that follows the pointer.

use crate::config::ParallaxConfig;
use crate::geometry::Rect;
use crate::surface::Surface;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate: DVec2,
    pub scale: f64,
}

impl Transform {
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Pointer position relative to the section center, each axis in [-0.5, 0.5]
/// while the pointer is inside the section.
#[inline]
pub fn normalized_offset(pointer: DVec2, section: Rect) -> DVec2 {
    if !section.has_area() {
        return DVec2::ZERO;
    }
    section.fraction_of(pointer) - DVec2::splat(0.5)
}

pub fn transform_for_pointer(pointer: DVec2, section: Rect, cfg: &ParallaxConfig) -> Transform {
    Transform {
        translate: normalized_offset(pointer, section) * cfg.max_offset_px,
        scale: cfg.scale,
    }
}

pub fn rest_transform(cfg: &ParallaxConfig) -> Transform {
    Transform {
        translate: DVec2::ZERO,
        scale: cfg.scale,
    }
}

pub fn apply_pointer(image: &impl Surface, pointer: DVec2, section: Rect, cfg: &ParallaxConfig) {
    image.set_style("transform", &transform_for_pointer(pointer, section, cfg).to_css());
}

pub fn reset(image: &impl Surface, cfg: &ParallaxConfig) {
    image.set_style("transform", &rest_transform(cfg).to_css());
}

// DOM contract with the site markup and stylesheet.
// Class names and custom properties written by the behaviors live in
// `bistro_core::constants`; this file only names what is read.

pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";
pub const NAV_SELECTOR: &str = ".nav";

// Cards receive the proximity glow and, on touch devices, tap feedback.
pub const CARD_SELECTOR: &str = ".menu-card";

// Elements revealed on scroll; also defines the sibling set used for stagger.
pub const REVEAL_SELECTOR: &str = ".about-content, .about-image, .menu-card, .gallery-item";
// Sibling set for reveal stagger; mirrors `bistro_core::constants::STAGGER_CLASSES`.
pub const STAGGER_SELECTOR: &str = ".menu-card, .gallery-item";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Feature probes on `window`
pub const TOUCH_EVENT_PROBE: &str = "ontouchstart";
pub const INTERSECTION_OBSERVER_PROBE: &str = "IntersectionObserver";

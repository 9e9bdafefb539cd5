// Tuning constants shared by the web frontend and the host tests.

// Parallax
pub const PARALLAX_MAX_OFFSET_PX: f64 = 15.0; // translation at a normalized offset of 1.0
pub const PARALLAX_SCALE: f64 = 1.05; // fixed zoom so translated edges stay covered
pub const PARALLAX_INTERVAL_MS: u32 = 16; // ~60 Hz

// Navigation
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
pub const NAV_INTERVAL_MS: u32 = 50;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;
// Only these classes form a stagger sibling set; other revealed elements
// start without delay.
pub const STAGGER_CLASSES: &[&str] = &["menu-card", "gallery-item"];
pub const REVEAL_FALLBACK_INTERVAL_MS: u32 = 50;

// Viewport test
pub const VIEWPORT_DEFAULT_OFFSET: f64 = 0.15;

// Touch feedback
pub const TOUCH_RELEASE_DELAY_MS: u32 = 150;

// Motion variables
pub const TRANSITION_SMOOTH_VAR: &str = "--transition-smooth";
pub const TRANSITION_SLOW_VAR: &str = "--transition-slow";
pub const TRANSITION_SMOOTH_EASED: &str = "0.4s cubic-bezier(0.4, 0, 0.2, 1)";
pub const TRANSITION_SLOW_EASED: &str = "0.8s cubic-bezier(0.4, 0, 0.2, 1)";
pub const TRANSITION_DISABLED: &str = "0s";

// Glow variables
pub const GLOW_X_VAR: &str = "--mouse-x";
pub const GLOW_Y_VAR: &str = "--mouse-y";

// Class names produced
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_TOUCH_DEVICE: &str = "touch-device";
pub const CLASS_TOUCHED: &str = "touched";

pub mod anchor;
pub mod config;
pub mod constants;
pub mod device;
pub mod geometry;
pub mod glow;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod schedule;
pub mod surface;
pub mod throttle;
pub mod touch;
pub mod viewport;

pub use config::*;
pub use device::DeviceMode;
pub use geometry::Rect;
pub use nav::NavState;
pub use reveal::RevealTracker;
pub use schedule::{Scheduler, VirtualScheduler};
pub use surface::Surface;
pub use throttle::throttle;

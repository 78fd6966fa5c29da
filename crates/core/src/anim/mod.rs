//! Animation primitives shared by every part of the engine.

mod easing;
mod interpolate;
mod timing;

pub use easing::Easing;
pub use interpolate::{interpolate, interpolate_range};
pub use timing::{AnimatedValue, Repeating, Timing};

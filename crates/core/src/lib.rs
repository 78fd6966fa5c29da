pub mod ambient;
pub mod anim;
pub mod config;
pub mod deriver;
pub mod intro;
pub mod navigation;
pub mod pages;
pub mod scheduler;
pub mod screen;
pub mod scroll;

/// Milliseconds on the host's monotonic clock. The engine never reads a
/// clock itself; every time-dependent call takes `now`.
pub type Millis = u64;

pub use config::{ConfigError, OnboardingConfig};
pub use navigation::{DetachedSurface, ScrollOutcome, ScrollSurface, ScrollTarget};
pub use screen::{OnboardingScreen, Stage};

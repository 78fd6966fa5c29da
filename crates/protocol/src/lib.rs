pub mod commands;
pub mod frame;
pub mod intent;
pub mod theme;
pub mod types;

pub use commands::HostCommand;
pub use frame::{CarouselFrame, IntroFrame, ScreenFrame, VisualFrame};
pub use intent::Intent;
pub use theme::ThemeToken;
pub use types::{Viewport, is_degenerate_width};

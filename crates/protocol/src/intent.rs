use serde::{Deserialize, Serialize};

/// A discrete user action on one of the onboarding controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// The skip button in the top bar.
    Skip,
    /// The arrow control shown on page `page`.
    Arrow { page: usize },
    /// The get-started button on the last page.
    GetStarted,
    /// Press or hover began on the arrow control.
    PressIn,
    /// Press or hover ended on the arrow control.
    PressOut,
}

use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the host's active theme.
///
/// The engine only names them; colors never influence animation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Surface,
    Text,
    TextMuted,
    Primary,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 4] = [
        ThemeToken::Surface,
        ThemeToken::Text,
        ThemeToken::TextMuted,
        ThemeToken::Primary,
    ];
}

use serde::{Deserialize, Serialize};

/// An instruction from the engine to its host.
///
/// Navigation commands are terminal: once a `ReplaceToMain` has been
/// emitted the onboarding screen is expected to unmount and nothing else
/// is emitted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostCommand {
    /// Replace the onboarding route with the main application. No return
    /// path: the host must not push.
    ReplaceToMain { route: String },

    /// Move the paged scroll surface to `index`. `offset` is already
    /// resolved to `index * page_width`.
    ScrollToPage {
        index: usize,
        offset: f64,
        animated: bool,
    },
}

impl HostCommand {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ReplaceToMain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let cmd = HostCommand::ScrollToPage {
            index: 2,
            offset: 780.0,
            animated: true,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "scroll_to_page");
        assert_eq!(json["index"], 2);

        let replace = HostCommand::ReplaceToMain {
            route: "/(tabs)".into(),
        };
        let back: HostCommand =
            serde_json::from_str(&serde_json::to_string(&replace).unwrap()).unwrap();
        assert!(back.is_terminal());
        assert_eq!(back, replace);
    }
}

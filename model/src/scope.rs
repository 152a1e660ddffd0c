//! Global dashboard flags

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Flags the dashboard keeps on its root scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RootScope {
    #[serde(rename = "hideLoader")]
    pub hide_loader: bool,

    #[serde(rename = "showIDE")]
    pub show_ide: bool,

    #[serde(rename = "wantTokeepLoader")]
    pub want_to_keep_loader: bool,
}

impl RootScope {
    /// Switch to the IDE view; the loader stays up when asked to
    pub fn enter_ide(&mut self) {
        self.show_ide = true;
        if !self.want_to_keep_loader {
            self.hide_loader = true;
        }
    }

    /// Switch back to the dashboard view
    pub fn enter_dashboard(&mut self) {
        self.show_ide = false;
        self.hide_loader = true;
        self.want_to_keep_loader = false;
    }

    pub fn keep_loader(&mut self) {
        self.want_to_keep_loader = true;
        self.hide_loader = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loader_follows_view() {
        let mut scope = RootScope::default();
        assert!(!scope.hide_loader && !scope.show_ide);

        scope.keep_loader();
        scope.enter_ide();
        assert!(scope.show_ide);
        assert!(!scope.hide_loader);

        scope.enter_dashboard();
        assert!(!scope.show_ide);
        assert!(scope.hide_loader);

        scope.enter_ide();
        assert!(scope.hide_loader);
    }

    #[test]
    fn wire_keys_are_preserved() {
        let scope = RootScope {
            hide_loader: true,
            show_ide: true,
            want_to_keep_loader: false,
        };
        assert_eq!(
            serde_json::to_value(scope).unwrap(),
            json!({ "hideLoader": true, "showIDE": true, "wantTokeepLoader": false })
        );
        assert!(serde_json::from_value::<RootScope>(json!({ "hideLoader": true })).is_err());
    }
}

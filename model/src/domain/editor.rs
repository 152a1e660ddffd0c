//! Editor settings

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options of the embedded recipe editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Syntax mode, e.g. `text/x-dockerfile`
    pub mode: String,
    pub line_numbers: bool,
    pub line_wrapping: bool,
    pub match_brackets: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            mode: "text/x-dockerfile".to_string(),
            line_numbers: true,
            line_wrapping: true,
            match_brackets: true,
        }
    }
}


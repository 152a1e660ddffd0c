//! Workspace commands

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Command defined in a workspace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCommand {
    pub name: String,

    #[serde(rename = "type")]
    pub command_type: String,

    pub command_line: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CommandAttributes>,
}

impl WorkspaceCommand {
    pub fn new(
        name: impl Into<String>,
        command_type: impl Into<String>,
        command_line: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command_type: command_type.into(),
            command_line: command_line.into(),
            attributes: None,
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.attributes.as_ref()?.preview_url.as_deref()
    }
}

/// Command attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandAttributes {
    /// URL opened once the command runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

//! Stack domain model

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::workspace::WorkspaceConfig;

/// Stack entity
///
/// A stack is a reusable workspace template: a predefined configuration
/// plus the metadata used to present it in the stack library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Visibility scope, e.g. `general` or `advanced`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Installed components, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Value>>,

    /// Stack source descriptor, passed through untouched
    pub source: Value,

    /// Configuration new workspaces are created from
    pub workspace_config: WorkspaceConfig,
}

impl Stack {
    /// Workspace configuration for a new workspace called `name`
    pub fn instantiate(&self, name: impl Into<String>) -> WorkspaceConfig {
        WorkspaceConfig {
            name: Some(name.into()),
            ..self.workspace_config.clone()
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
    }
}

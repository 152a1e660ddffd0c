//! Document catalog
//!
//! Maps the document kinds accepted by the dashboard service to their
//! decoding, validation and JSON Schema.

use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::command::WorkspaceCommand;
use crate::domain::editor::EditorOptions;
use crate::domain::project::{ImportProject, Project};
use crate::domain::stack::Stack;
use crate::domain::workspace::{Workspace, WorkspaceConfig};
use crate::error::{Error, Result};
use crate::route::RouteParams;
use crate::scope::RootScope;
use crate::validation::{Validate, Validation};

/// Kind of document understood by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Workspace,
    WorkspaceConfig,
    Stack,
    Project,
    ImportProject,
    Command,
    EditorOptions,
    RouteParams,
    RootScope,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 9] = [
        DocumentKind::Workspace,
        DocumentKind::WorkspaceConfig,
        DocumentKind::Stack,
        DocumentKind::Project,
        DocumentKind::ImportProject,
        DocumentKind::Command,
        DocumentKind::EditorOptions,
        DocumentKind::RouteParams,
        DocumentKind::RootScope,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Workspace => "workspace",
            DocumentKind::WorkspaceConfig => "workspace-config",
            DocumentKind::Stack => "stack",
            DocumentKind::Project => "project",
            DocumentKind::ImportProject => "import-project",
            DocumentKind::Command => "command",
            DocumentKind::EditorOptions => "editor-options",
            DocumentKind::RouteParams => "route-params",
            DocumentKind::RootScope => "root-scope",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Like [`DocumentKind::from_str`], failing with an error for unknown kinds
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownDocumentKind(s.to_string()))
    }
}

/// Decode a document of the given kind and apply its rules
///
/// A document that does not decode yields a single error describing why.
pub fn validate_document(kind: DocumentKind, value: &Value) -> Validation {
    let result = match kind {
        DocumentKind::Workspace => checked::<Workspace>(kind, value),
        DocumentKind::WorkspaceConfig => checked::<WorkspaceConfig>(kind, value),
        DocumentKind::Stack => checked::<Stack>(kind, value),
        DocumentKind::Project => checked::<Project>(kind, value),
        DocumentKind::ImportProject => checked::<ImportProject>(kind, value),
        DocumentKind::Command => checked::<WorkspaceCommand>(kind, value),
        DocumentKind::EditorOptions => structural::<EditorOptions>(kind, value),
        DocumentKind::RouteParams => structural::<RouteParams>(kind, value),
        DocumentKind::RootScope => structural::<RootScope>(kind, value),
    };

    debug!(
        "Validated {} document: valid={}, errors={}",
        kind.as_str(),
        result.is_valid,
        result.errors.len()
    );
    result
}

fn decode<T: DeserializeOwned>(
    kind: DocumentKind,
    value: &Value,
) -> std::result::Result<T, Validation> {
    T::deserialize(value)
        .map_err(|e| Validation::invalid(format!("Malformed {} document: {e}", kind.as_str())))
}

fn checked<T: DeserializeOwned + Validate>(kind: DocumentKind, value: &Value) -> Validation {
    match decode::<T>(kind, value) {
        Ok(document) => document.validate(),
        Err(result) => result,
    }
}

fn structural<T: DeserializeOwned>(kind: DocumentKind, value: &Value) -> Validation {
    match decode::<T>(kind, value) {
        Ok(_) => Validation::valid(),
        Err(result) => result,
    }
}

/// JSON Schema describing documents of the given kind
pub fn schema_for(kind: DocumentKind) -> Result<Value> {
    let schema = match kind {
        DocumentKind::Workspace => schema_for!(Workspace),
        DocumentKind::WorkspaceConfig => schema_for!(WorkspaceConfig),
        DocumentKind::Stack => schema_for!(Stack),
        DocumentKind::Project => schema_for!(Project),
        DocumentKind::ImportProject => schema_for!(ImportProject),
        DocumentKind::Command => schema_for!(WorkspaceCommand),
        DocumentKind::EditorOptions => schema_for!(EditorOptions),
        DocumentKind::RouteParams => schema_for!(RouteParams),
        DocumentKind::RootScope => schema_for!(RootScope),
    };
    Ok(serde_json::to_value(schema)?)
}

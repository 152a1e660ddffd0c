//! Validation rules applied to dashboard documents before submission
//!
//! Every rule returns a [`Validation`] instead of failing fast so the
//! dashboard can show all problems of a document at once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::command::WorkspaceCommand;
use crate::domain::project::{ImportProject, Project};
use crate::domain::recipe::{Recipe, RecipeType};
use crate::domain::stack::Stack;
use crate::domain::workspace::{Workspace, WorkspaceConfig, WorkspaceEnvironment, WS_AGENT};

pub const WORKSPACE_NAME_MIN_LEN: usize = 3;
pub const WORKSPACE_NAME_MAX_LEN: usize = 100;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-\.]+$").expect("valid name pattern"));

/// Result of validating a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Default for Validation {
    fn default() -> Self {
        Self::valid()
    }
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
        }
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(error.into());
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: Validation) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
    }

    /// Fold another result in, prefixing each of its messages
    fn merge_prefixed(&mut self, prefix: &str, other: Validation) {
        self.is_valid &= other.is_valid;
        self.errors
            .extend(other.errors.into_iter().map(|e| format!("{prefix}: {e}")));
    }
}

/// Documents that carry their own validation rules
pub trait Validate {
    fn validate(&self) -> Validation;
}

pub fn validate_workspace_name(name: &str) -> Validation {
    let mut result = Validation::valid();
    let len = name.chars().count();

    if name.is_empty() {
        result.push_error("Workspace name is required");
        return result;
    }
    if !(WORKSPACE_NAME_MIN_LEN..=WORKSPACE_NAME_MAX_LEN).contains(&len) {
        result.push_error(format!(
            "Workspace name must be between {WORKSPACE_NAME_MIN_LEN} and {WORKSPACE_NAME_MAX_LEN} characters"
        ));
    }
    if !NAME_PATTERN.is_match(name) {
        result.push_error("Workspace name may contain only letters, digits, '_', '-' and '.'");
    }
    result
}

pub fn validate_project_name(name: &str) -> Validation {
    if name.is_empty() {
        return Validation::invalid("Project name is required");
    }
    if !NAME_PATTERN.is_match(name) {
        return Validation::invalid(
            "Project name may contain only letters, digits, '_', '-' and '.'",
        );
    }
    Validation::valid()
}

impl Validate for Recipe {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();
        if self.kind().is_none() {
            result.push_error(format!("Unknown recipe type: {}", self.recipe_type));
        }
        if self.content.trim().is_empty() {
            result.push_error("Recipe content is required");
        }
        result
    }
}

impl Validate for WorkspaceEnvironment {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();

        if self.machines.is_empty() {
            result.push_error("Environment has no machines");
        }

        let dev_machines = self
            .machines
            .values()
            .filter(|machine| machine.has_agent(WS_AGENT))
            .count();
        if dev_machines > 1 {
            result.push_error("Only one machine may run the workspace agent");
        }

        // A single-image recipe cannot describe more than one machine
        if self.recipe.kind() == Some(RecipeType::Dockerimage) && self.machines.len() > 1 {
            result.push_error("A dockerimage recipe describes exactly one machine");
        }

        result.merge(self.recipe.validate());
        result
    }
}

impl Validate for WorkspaceConfig {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();

        if let Some(name) = &self.name {
            result.merge(validate_workspace_name(name));
        }

        let empty = BTreeMap::new();
        let environments = self.environments.as_ref().unwrap_or(&empty);

        if let Some(default_env) = &self.default_env {
            if !environments.contains_key(default_env) {
                result.push_error(format!("Default environment '{default_env}' is not defined"));
            }
        }

        for (env_name, env) in environments {
            result.merge_prefixed(&format!("Environment '{env_name}'"), env.validate());
        }

        for (index, value) in self.commands.iter().flatten().enumerate() {
            match serde_json::from_value::<WorkspaceCommand>(value.clone()) {
                Ok(command) => {
                    result.merge_prefixed(&format!("Command '{}'", command.name), command.validate())
                }
                Err(e) => result.push_error(format!("Command {index} is malformed: {e}")),
            }
        }

        result
    }
}

impl Validate for Workspace {
    fn validate(&self) -> Validation {
        self.config.validate()
    }
}

impl Validate for Stack {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();
        if self.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
            result.push_error("Stack name is required");
        }
        result.merge_prefixed("Workspace config", self.workspace_config.validate());
        result
    }
}

impl Validate for Project {
    fn validate(&self) -> Validation {
        let mut result = validate_project_name(&self.name);
        if self.source.location.trim().is_empty() {
            result.push_error("Project source location is required");
        }
        result
    }
}

impl Validate for ImportProject {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();
        if self.source.location.trim().is_empty() {
            result.push_error("Project source location is required");
        }
        if self.source.source_type.trim().is_empty() {
            result.push_error("Project source type is required");
        }
        result.merge(validate_project_name(&self.project.name));
        result
    }
}

impl Validate for WorkspaceCommand {
    fn validate(&self) -> Validation {
        let mut result = Validation::valid();
        if self.name.trim().is_empty() {
            result.push_error("Command name is required");
        }
        if self.command_type.trim().is_empty() {
            result.push_error("Command type is required");
        }
        if self.command_line.trim().is_empty() {
            result.push_error("Command line is required");
        }
        result
    }
}

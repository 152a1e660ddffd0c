//! Workspace domain model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::command::WorkspaceCommand;
use crate::domain::recipe::Recipe;
use crate::error::{Error, Result};

/// Agent identifier carried by the machine that hosts the workspace agent
pub const WS_AGENT: &str = "org.eclipse.che.ws-agent";

/// Workspace runtime status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceStatus {
    /// Workspace runtime is being started
    Starting,
    /// Workspace runtime is up
    Running,
    /// Workspace runtime is being stopped
    Stopping,
    /// Workspace has no runtime
    Stopped,
    /// Machines are being snapshotted
    Snapshotting,
    /// Workspace runtime failed
    Error,
}

impl WorkspaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceStatus::Starting => "STARTING",
            WorkspaceStatus::Running => "RUNNING",
            WorkspaceStatus::Stopping => "STOPPING",
            WorkspaceStatus::Stopped => "STOPPED",
            WorkspaceStatus::Snapshotting => "SNAPSHOTTING",
            WorkspaceStatus::Error => "ERROR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "STARTING" => Some(WorkspaceStatus::Starting),
            "RUNNING" => Some(WorkspaceStatus::Running),
            "STOPPING" => Some(WorkspaceStatus::Stopping),
            "STOPPED" => Some(WorkspaceStatus::Stopped),
            "SNAPSHOTTING" => Some(WorkspaceStatus::Snapshotting),
            "ERROR" => Some(WorkspaceStatus::Error),
            _ => None,
        }
    }
}

/// Workspace document
///
/// Only `config` is required; everything else is filled in by the backend
/// once the workspace exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Unique identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Runtime description, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Value>,

    /// Whether the workspace is removed once stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporary: Option<bool>,

    /// Raw status string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Owner namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Timestamps and free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<WorkspaceAttributes>,

    /// Workspace configuration
    pub config: WorkspaceConfig,
}

impl Workspace {
    /// Create a workspace document around a configuration
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Parsed status, `None` when absent or not a known status
    pub fn status(&self) -> Option<WorkspaceStatus> {
        self.status.as_deref().and_then(WorkspaceStatus::from_str)
    }

    /// Check if the workspace runtime is up
    pub fn is_running(&self) -> bool {
        self.status() == Some(WorkspaceStatus::Running)
    }

    /// Name from the workspace configuration
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }
}

/// Workspace attributes
///
/// The backend sends timestamps as numeric strings while the dashboard
/// treats them as numbers; both spellings are accepted and numbers are
/// written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceAttributes {
    /// Creation time in epoch milliseconds
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "millis::deserialize"
    )]
    #[schemars(with = "Option<i64>")]
    pub created: Option<i64>,

    /// Last update time in epoch milliseconds
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "millis::deserialize"
    )]
    #[schemars(with = "Option<i64>")]
    pub updated: Option<i64>,

    /// Free-form metadata
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl WorkspaceAttributes {
    pub fn created_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.created.map(to_datetime).transpose()
    }

    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        self.updated.map(to_datetime).transpose()
    }
}

fn to_datetime(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(Error::InvalidTimestamp(millis))
}

mod millis {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(value)) => Ok(Some(value)),
            Some(Raw::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid timestamp: {text}"))),
        }
    }
}

/// Workspace configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Key into `environments` used when the workspace starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_env: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<BTreeMap<String, WorkspaceEnvironment>>,

    /// Project entries, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Value>>,

    /// Command entries, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Value>>,
}

impl WorkspaceConfig {
    /// Create a configuration with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Environment referenced by `defaultEnv`
    pub fn default_environment(&self) -> Option<&WorkspaceEnvironment> {
        let key = self.default_env.as_ref()?;
        self.environments.as_ref()?.get(key)
    }

    /// Decode the command entries
    pub fn typed_commands(&self) -> Result<Vec<WorkspaceCommand>> {
        let Some(commands) = &self.commands else {
            return Ok(Vec::new());
        };

        commands
            .iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value.clone()).map_err(|e| Error::Decode {
                    index,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// Machines of an environment keyed by machine name
pub type Machines = BTreeMap<String, Machine>;

/// Workspace environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceEnvironment {
    pub machines: Machines,
    pub recipe: Recipe,
}

impl WorkspaceEnvironment {
    /// Machine hosting the workspace agent
    pub fn dev_machine(&self) -> Option<(&str, &Machine)> {
        self.machines
            .iter()
            .find(|(_, machine)| machine.has_agent(WS_AGENT))
            .map(|(name, machine)| (name.as_str(), machine))
    }
}

/// Machine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Machine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,

    /// Server descriptors, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Value>,

    /// Machine attributes, passed through untouched
    pub attributes: Value,
}

impl Machine {
    pub fn has_agent(&self, agent: &str) -> bool {
        self.agents
            .as_ref()
            .is_some_and(|agents| agents.iter().any(|a| a == agent))
    }
}

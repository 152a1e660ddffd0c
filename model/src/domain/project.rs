//! Project domain model

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub source: ProjectSource,
    pub commands: Vec<Value>,
    pub project_type: String,
    pub tags: Vec<String>,
    pub attributes: Vec<Value>,
    pub options: Vec<Value>,

    /// Identifier of the workspace owning this project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_name: Option<String>,
}

impl Project {
    pub fn is_owned_by(&self, workspace_id: &str) -> bool {
        self.workspace_id.as_deref() == Some(workspace_id)
    }
}

/// Where the project sources come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSource {
    pub location: String,

    /// Importer parameters, passed through untouched
    pub parameters: Value,

    #[serde(rename = "type")]
    pub source_type: String,
}

/// Projects grouped by owning workspace identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct WorkspaceProjects(pub BTreeMap<String, Vec<Project>>);

impl WorkspaceProjects {
    pub fn projects_for(&self, workspace_id: &str) -> &[Project] {
        self.0.get(workspace_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Group projects by their `workspaceId`; projects without one are skipped
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut grouped: BTreeMap<String, Vec<Project>> = BTreeMap::new();
        for project in projects {
            if let Some(id) = project.workspace_id.clone() {
                grouped.entry(id).or_default().push(project);
            }
        }
        Self(grouped)
    }
}

/// Request to create a project inside a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImportProject {
    pub source: ImportSource,
    pub project: ImportProjectDescriptor,
}

impl ImportProject {
    /// Import request with empty parameters, commands, attributes and options
    pub fn from_location(
        name: impl Into<String>,
        source_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let source_type = source_type.into();
        Self {
            source: ImportSource {
                source_type: source_type.clone(),
                location: location.into(),
                parameters: Value::Object(Default::default()),
            },
            project: ImportProjectDescriptor {
                name: name.into(),
                project_type: "blank".to_string(),
                description: String::new(),
                commands: Vec::new(),
                attributes: Vec::new(),
                options: Vec::new(),
            },
        }
    }
}

/// Source of a project import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImportSource {
    #[serde(rename = "type")]
    pub source_type: String,

    pub location: String,

    /// Importer parameters, e.g. `branch` for git
    pub parameters: Value,
}

/// Project part of an import request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImportProjectDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub project_type: String,

    pub description: String,
    pub commands: Vec<Value>,
    pub attributes: Vec<Value>,
    pub options: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn project(name: &str, workspace_id: Option<&str>) -> Project {
        Project {
            name: name.to_string(),
            display_name: name.to_string(),
            description: String::new(),
            source: ProjectSource {
                location: format!("https://github.com/example/{name}.git"),
                parameters: json!({}),
                source_type: "git".to_string(),
            },
            commands: Vec::new(),
            project_type: "maven".to_string(),
            tags: Vec::new(),
            attributes: Vec::new(),
            options: Vec::new(),
            workspace_id: workspace_id.map(str::to_string),
            workspace_name: None,
        }
    }

    #[test]
    fn project_wire_names() {
        let value = serde_json::to_value(project("console-java-simple", Some("workspace1"))).unwrap();
        assert_eq!(value["displayName"], "console-java-simple");
        assert_eq!(value["projectType"], "maven");
        assert_eq!(value["source"]["type"], "git");
        assert_eq!(value["workspaceId"], "workspace1");
        assert!(value.get("workspaceName").is_none());
    }

    #[test]
    fn grouping_by_workspace() {
        let grouped = WorkspaceProjects::from_projects(vec![
            project("a", Some("ws-1")),
            project("b", Some("ws-2")),
            project("c", Some("ws-1")),
            project("orphan", None),
        ]);

        let names: Vec<_> = grouped.projects_for("ws-1").iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(grouped.projects_for("ws-3").is_empty());
        assert!(grouped.projects_for("ws-2")[0].is_owned_by("ws-2"));

        let value = serde_json::to_value(&grouped).unwrap();
        assert_eq!(value["ws-2"][0]["name"], "b");
    }

    #[test]
    fn import_from_location() {
        let import = ImportProject::from_location(
            "spring-petclinic",
            "git",
            "https://github.com/spring-projects/spring-petclinic.git",
        );

        assert_eq!(
            serde_json::to_value(&import).unwrap(),
            json!({
                "source": {
                    "type": "git",
                    "location": "https://github.com/spring-projects/spring-petclinic.git",
                    "parameters": {}
                },
                "project": {
                    "name": "spring-petclinic",
                    "type": "blank",
                    "description": "",
                    "commands": [],
                    "attributes": [],
                    "options": []
                }
            })
        );
    }
}

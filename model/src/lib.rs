//! Dashboard model
//!
//! Typed documents exchanged between the workspace dashboard and the
//! workspace backend: workspaces and their configurations, stacks, projects,
//! commands and editor settings, together with the validation rules the
//! dashboard applies before submitting them.

pub mod document;
pub mod domain;
pub mod error;
pub mod register;
pub mod route;
pub mod scope;
pub mod validation;

pub use document::DocumentKind;
pub use domain::command::{CommandAttributes, WorkspaceCommand};
pub use domain::editor::EditorOptions;
pub use domain::project::{
    ImportProject, ImportProjectDescriptor, ImportSource, Project, ProjectSource, WorkspaceProjects,
};
pub use domain::recipe::{Recipe, RecipeType};
pub use domain::stack::Stack;
pub use domain::workspace::{
    Machine, Machines, Workspace, WorkspaceAttributes, WorkspaceConfig, WorkspaceEnvironment,
    WorkspaceStatus,
};
pub use error::{Error, Result};
pub use register::{ComponentKind, ComponentRegistry, Register, ServiceProvider};
pub use route::{IdeParams, RouteParams};
pub use scope::RootScope;
pub use validation::{Validate, Validation};

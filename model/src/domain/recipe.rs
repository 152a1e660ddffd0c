//! Environment recipe

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provisioning format of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecipeType {
    /// Dockerfile built into the machine image
    Dockerfile,
    /// Reference to an existing image
    Dockerimage,
    /// Compose file describing several machines
    Compose,
}

impl RecipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Dockerfile => "dockerfile",
            RecipeType::Dockerimage => "dockerimage",
            RecipeType::Compose => "compose",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dockerfile" => Some(RecipeType::Dockerfile),
            "dockerimage" => Some(RecipeType::Dockerimage),
            "compose" => Some(RecipeType::Compose),
            _ => None,
        }
    }

    /// Content type expected for this kind of recipe
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RecipeType::Dockerfile => Some("text/x-dockerfile"),
            RecipeType::Dockerimage => None,
            RecipeType::Compose => Some("application/x-yaml"),
        }
    }
}

/// Recipe of a workspace environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe body; the image reference for `dockerimage` recipes
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(rename = "type")]
    pub recipe_type: String,
}

impl Recipe {
    /// Build a recipe with the content type its kind expects
    pub fn new(kind: RecipeType, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: kind.content_type().map(str::to_string),
            recipe_type: kind.as_str().to_string(),
        }
    }

    pub fn kind(&self) -> Option<RecipeType> {
        RecipeType::from_str(&self.recipe_type)
    }
}

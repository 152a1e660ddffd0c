//! Dashboard route parameters

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `ideParams` may be given once or repeated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum IdeParams {
    One(String),
    Many(Vec<String>),
}

impl Default for IdeParams {
    fn default() -> Self {
        IdeParams::One(String::new())
    }
}

impl IdeParams {
    fn push(&mut self, value: String) {
        *self = match std::mem::take(self) {
            IdeParams::One(first) if first.is_empty() => IdeParams::One(value),
            IdeParams::One(first) => IdeParams::Many(vec![first, value]),
            IdeParams::Many(mut all) => {
                all.push(value);
                IdeParams::Many(all)
            }
        };
    }
}

/// Parameters the dashboard reads from its current route
///
/// Missing parameters are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteParams {
    pub action: String,
    pub ide_params: IdeParams,
    pub namespace: String,
    pub show_logs: String,
    pub workspace_name: String,
    pub tab_name: String,
}

impl RouteParams {
    /// Collect parameters from key/value pairs; unknown keys are ignored
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "action" => params.action = value.into(),
                "ideParams" => params.ide_params.push(value.into()),
                "namespace" => params.namespace = value.into(),
                "showLogs" => params.show_logs = value.into(),
                "workspaceName" => params.workspace_name = value.into(),
                "tabName" => params.tab_name = value.into(),
                _ => {}
            }
        }
        params
    }

    /// Parse a URL query string, with or without the leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    pub fn show_logs(&self) -> bool {
        self.show_logs.eq_ignore_ascii_case("true")
    }

    /// All non-empty `ideParams` values in order
    pub fn ide_params_list(&self) -> Vec<&str> {
        match &self.ide_params {
            IdeParams::One(value) => vec![value.as_str()],
            IdeParams::Many(values) => values.iter().map(String::as_str).collect(),
        }
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect()
    }
}

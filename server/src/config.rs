//! Server configuration

use dashboard_model::EditorOptions;
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server host
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Prefix all API routes are nested under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Origins allowed by CORS; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Default syntax mode of the recipe editor
    #[serde(default = "default_editor_mode")]
    pub editor_mode: String,

    #[serde(default = "default_true")]
    pub editor_line_numbers: bool,

    #[serde(default = "default_true")]
    pub editor_line_wrapping: bool,

    #[serde(default = "default_true")]
    pub editor_match_brackets: bool,
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8080
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_editor_mode() -> String {
    EditorOptions::default().mode
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    /// Build configuration from any `DASHBOARD_*` variable source;
    /// unparseable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("DASHBOARD_HTTP_HOST") {
            config.http_host = val;
        }
        if let Some(val) = lookup("DASHBOARD_HTTP_PORT") {
            if let Ok(port) = val.parse() {
                config.http_port = port;
            }
        }
        if let Some(val) = lookup("DASHBOARD_API_PREFIX") {
            config.api_prefix = normalize_prefix(&val);
        }
        if let Some(val) = lookup("DASHBOARD_CORS_ORIGINS") {
            // Parse comma-separated list of origins
            config.cors_origins = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(val) = lookup("DASHBOARD_EDITOR_MODE") {
            config.editor_mode = val;
        }
        if let Some(val) = lookup("DASHBOARD_EDITOR_LINE_NUMBERS") {
            if let Ok(flag) = val.parse() {
                config.editor_line_numbers = flag;
            }
        }
        if let Some(val) = lookup("DASHBOARD_EDITOR_LINE_WRAPPING") {
            if let Ok(flag) = val.parse() {
                config.editor_line_wrapping = flag;
            }
        }
        if let Some(val) = lookup("DASHBOARD_EDITOR_MATCH_BRACKETS") {
            if let Ok(flag) = val.parse() {
                config.editor_match_brackets = flag;
            }
        }

        config
    }

    /// Editor options handed to the dashboard
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            mode: self.editor_mode.clone(),
            line_numbers: self.editor_line_numbers,
            line_wrapping: self.editor_line_wrapping,
            match_brackets: self.editor_match_brackets,
        }
    }
}

/// Leading slash, no trailing slash
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    format!("/{}", trimmed)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: default_http_host(),
            http_port: default_http_port(),
            api_prefix: default_api_prefix(),
            cors_origins: Vec::new(),
            editor_mode: default_editor_mode(),
            editor_line_numbers: default_true(),
            editor_line_wrapping: default_true(),
            editor_match_brackets: default_true(),
        }
    }
}

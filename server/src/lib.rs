//! Dashboard document service
//!
//! HTTP service the workspace dashboard uses to validate workspace, stack and
//! project documents before sending them to the workspace backend, to fetch
//! their JSON Schemas and to derive new workspace configurations from stacks.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;

pub use api::http::create_router;
pub use config::Config;
pub use error::{Error, Result};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

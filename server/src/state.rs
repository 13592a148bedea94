//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no session data; the only state is immutable configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ServerConfig;

/// Cheap-to-clone handle on the `api.json` location.
#[derive(Clone)]
pub struct AppState {
    api_json_path: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self { api_json_path: Arc::new(config.api_json_path.clone()) }
    }

    /// Path of the document served by `GET /api/login`.
    #[must_use]
    pub fn api_json_path(&self) -> &Path {
        &self.api_json_path
    }
}

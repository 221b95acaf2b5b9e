pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use services::analysis::Analyzer;
use std::sync::Arc;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self { analyzer }
    }
}

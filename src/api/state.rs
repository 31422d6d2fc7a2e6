//! Application state for the workforce engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::store::HrStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the record store and the engine configuration.
#[derive(Clone)]
pub struct AppState {
    /// The record store.
    store: Arc<HrStore>,
    /// The loaded engine configuration.
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: HrStore, config: EngineConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &HrStore {
        &self.store
    }

    /// Returns a reference to the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

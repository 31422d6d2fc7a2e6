//! Engine configuration.
//!
//! This module provides the [`EngineConfig`] type for loading analytics
//! defaults from a YAML file, with built-in fallbacks when no file is
//! supplied.

mod settings;

pub use settings::{AnalyticsDefaults, EngineConfig};

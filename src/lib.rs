//! Workforce Engine
//!
//! This crate provides the core of an HR management backend: a record store
//! for employees, teams, compensation events, feedback, and milestones, an
//! aggregation engine that derives workforce metrics from those records,
//! and an HTTP API exposing both.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

//! Error types for the workforce engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur across the store, the analytics
//! layer, and the HTTP API.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the workforce engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let error = EngineError::EmployeeNotFound { id };
/// assert_eq!(
///     error.to_string(),
///     format!("Employee not found: {id}")
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The referenced employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: Uuid,
    },

    /// The referenced team does not exist.
    #[error("Team not found: {id}")]
    TeamNotFound {
        /// The team id that was not found.
        id: Uuid,
    },

    /// The referenced team membership does not exist.
    #[error("Team membership not found: {id}")]
    MembershipNotFound {
        /// The membership id that was not found.
        id: Uuid,
    },

    /// The referenced feedback record does not exist.
    #[error("Feedback record not found: {id}")]
    FeedbackNotFound {
        /// The feedback id that was not found.
        id: Uuid,
    },

    /// The referenced milestone does not exist.
    #[error("Milestone not found: {id}")]
    MilestoneNotFound {
        /// The milestone id that was not found.
        id: Uuid,
    },

    /// The referenced actor does not exist.
    #[error("Actor not found: {id}")]
    ActorNotFound {
        /// The actor id that was not found.
        id: Uuid,
    },

    /// An overall feedback score was outside the accepted range.
    #[error("Overall score must be between 0 and 5, got {value}")]
    InvalidScore {
        /// The rejected score, as supplied by the caller.
        value: String,
    },

    /// A rating level in a KPI payload failed validation.
    #[error("Invalid level for {category} '{name}': {message}")]
    InvalidRating {
        /// The rating category ("quality" or "defect").
        category: String,
        /// The name of the offending rating entry.
        name: String,
        /// A description of what made the level invalid.
        message: String,
    },

    /// An input field was invalid or contained inconsistent data.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The acting user lacks the rights to perform the operation.
    #[error("Not allowed: {message}")]
    Forbidden {
        /// A description of the failed authorization check.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The backing store failed; propagated as-is, never retried.
    #[error("Backing store failure: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

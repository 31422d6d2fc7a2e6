//! Core data models for the workforce engine.
//!
//! This module contains all the domain models used throughout the engine.

mod actor;
mod compensation;
mod employee;
mod feedback;
mod milestone;
mod team;

pub use actor::{Actor, ActorRole};
pub use compensation::{CompensationEvent, CompensationEventKind};
pub use employee::{Employee, EmploymentStatus};
pub use feedback::{
    FeedbackRecord, RatingEntry, RatingSet, max_score, validate_overall_score,
};
pub use milestone::Milestone;
pub use team::{MembershipStatus, Team, TeamMembership};

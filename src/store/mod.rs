//! The record store backing the engine.
//!
//! [`HrStore`] is the in-process realization of the persistence
//! collaborator: employees, teams, memberships, the append-only
//! compensation log, feedback records, milestones, and actors, all behind
//! one interior-mutability boundary. Feedback mutations and the rolling
//! average recomputation happen under a single write lock, so a
//! read-after-write always observes the latest average and concurrent
//! submissions for the same employee cannot lose updates.

mod memory;

pub use memory::{
    FeedbackSubmission, HrStore, MilestoneInput, NewEmployee, NewTeam, Snapshot,
};

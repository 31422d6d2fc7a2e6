//! Per-team performance averages.
//!
//! For each team, averages the rolling feedback scores of its active
//! members. Unrated members are excluded from both the numerator and the
//! denominator; teams with no rated active members are omitted entirely.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Employee, Team, TeamMembership};

/// The average rolling feedback score of one team's active members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPerformance {
    /// The team's id.
    pub team_id: Uuid,
    /// The team's display name.
    pub team_name: String,
    /// Mean rolling average score of rated active members.
    pub average_score: Decimal,
    /// Number of members contributing to the average.
    pub rated_members: u64,
}

/// Computes the per-team performance ranking.
///
/// A member qualifies when their membership is active, the employee is
/// active, and the employee has a rolling average score. Teams with no
/// qualifying members are excluded. Results are sorted descending by
/// average score, ties broken by team name.
pub fn team_performance(
    teams: &[Team],
    memberships: &[TeamMembership],
    employees: &[Employee],
) -> Vec<TeamPerformance> {
    let by_id: HashMap<Uuid, &Employee> = employees.iter().map(|e| (e.id, e)).collect();

    let mut results: Vec<TeamPerformance> = teams
        .iter()
        .filter_map(|team| {
            let scores: Vec<Decimal> = memberships
                .iter()
                .filter(|m| m.team_id == team.id && m.is_active())
                .filter_map(|m| by_id.get(&m.employee_id))
                .filter(|e| e.is_active())
                .filter_map(|e| e.average_score)
                .collect();

            if scores.is_empty() {
                return None;
            }

            let total: Decimal = scores.iter().sum();
            Some(TeamPerformance {
                team_id: team.id,
                team_name: team.name.clone(),
                average_score: total / Decimal::from(scores.len()),
                rated_members: scores.len() as u64,
            })
        })
        .collect();

    results.sort_by(|a, b| {
        b.average_score
            .cmp(&a.average_score)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    results
}

//! Milestone timeline model.
//!
//! Milestones are free-standing timeline entries, optionally tied to an
//! employee or a team, listed newest-first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timeline entry recording a company, team, or employee milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier for the milestone.
    pub id: Uuid,
    /// Short title shown on the timeline.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// The date the milestone occurred.
    pub date: NaiveDate,
    /// Free-form status label (e.g. "achieved", "planned").
    pub status: String,
    /// Icon hint for the presentation layer.
    pub icon: Option<String>,
    /// The employee the milestone is about, if any.
    pub employee_id: Option<Uuid>,
    /// The team the milestone is about, if any.
    pub team_id: Option<Uuid>,
    /// The actor who recorded the milestone.
    pub created_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_round_trip() {
        let milestone = Milestone {
            id: Uuid::new_v4(),
            title: "Platform team formed".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            status: "achieved".to_string(),
            icon: Some("flag".to_string()),
            employee_id: None,
            team_id: Some(Uuid::new_v4()),
            created_by: Uuid::new_v4(),
        };

        let json = serde_json::to_string(&milestone).unwrap();
        let deserialized: Milestone = serde_json::from_str(&json).unwrap();
        assert_eq!(milestone, deserialized);
    }
}

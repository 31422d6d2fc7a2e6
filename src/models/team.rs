//! Team and team membership models.
//!
//! A [`TeamMembership`] links an employee to a team over a date range.
//! Membership entry and exit dates are the canonical source of hire and
//! termination event dates for the aggregation layer; they are distinct
//! from the employee's own entry/exit dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The status of a team or team membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// The team or membership is current.
    Active,
    /// The team was disbanded or the member left; kept for history.
    Inactive,
}

/// A team of employees with a designated manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier for the team.
    pub id: Uuid,
    /// The team's display name.
    pub name: String,
    /// Free-form description of the team's charter.
    pub description: Option<String>,
    /// The actor managing the team.
    pub manager_id: Uuid,
    /// Whether the team is currently active.
    pub status: MembershipStatus,
}

/// An employee's association with a team over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMembership {
    /// Unique identifier for the membership.
    pub id: Uuid,
    /// The team the employee belongs to.
    pub team_id: Uuid,
    /// The employee who is a member.
    pub employee_id: Uuid,
    /// The member's responsibility within the team, if any.
    pub responsibility: Option<String>,
    /// Whether the membership is current.
    pub status: MembershipStatus,
    /// The date the member joined the team.
    pub entry_date: Option<NaiveDate>,
    /// The date the member left the team, if inactive.
    pub exit_date: Option<NaiveDate>,
}

impl TeamMembership {
    /// Returns true if the membership is current.
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }

    /// Returns true if the member joined in the given calendar month.
    pub fn entered_in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.entry_date
            .is_some_and(|d| d.year() == year && d.month() == month)
    }

    /// Returns true if the member left in the given calendar month.
    pub fn exited_in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.exit_date
            .is_some_and(|d| d.year() == year && d.month() == month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_membership() -> TeamMembership {
        TeamMembership {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            responsibility: Some("Tech lead".to_string()),
            status: MembershipStatus::Active,
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            exit_date: None,
        }
    }

    #[test]
    fn test_is_active() {
        let mut membership = create_test_membership();
        assert!(membership.is_active());

        membership.status = MembershipStatus::Inactive;
        assert!(!membership.is_active());
    }

    #[test]
    fn test_entered_in_month_matches_entry_date() {
        let membership = create_test_membership();
        assert!(membership.entered_in_month(2024, 3));
        assert!(!membership.entered_in_month(2024, 4));
        assert!(!membership.entered_in_month(2023, 3));
    }

    #[test]
    fn test_exited_in_month_without_exit_date() {
        let membership = create_test_membership();
        assert!(!membership.exited_in_month(2024, 3));
    }

    #[test]
    fn test_exited_in_month_matches_exit_date() {
        let mut membership = create_test_membership();
        membership.status = MembershipStatus::Inactive;
        membership.exit_date = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert!(membership.exited_in_month(2025, 1));
        assert!(!membership.exited_in_month(2025, 2));
    }

    #[test]
    fn test_membership_status_serialization() {
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&MembershipStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }

    #[test]
    fn test_membership_round_trip() {
        let membership = create_test_membership();
        let json = serde_json::to_string(&membership).unwrap();
        let deserialized: TeamMembership = serde_json::from_str(&json).unwrap();
        assert_eq!(membership, deserialized);
    }
}

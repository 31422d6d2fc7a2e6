//! Request types for the workforce engine API.
//!
//! This module defines the JSON request structures for the HTTP endpoints.
//! Decimal fields travel as JSON strings, matching the serialization of
//! the domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ActorRole, RatingEntry};
use crate::store::{FeedbackSubmission, MilestoneInput, NewEmployee, NewTeam};

/// Request body for `POST /actors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterActorRequest {
    /// The actor's display name.
    pub name: String,
    /// The actor's role.
    pub role: ActorRole,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireEmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// The employee's initial role title.
    pub role: String,
    /// Initial compensation, as a decimal string.
    pub compensation: Decimal,
    /// The date the employee enters the company.
    pub entry_date: NaiveDate,
}

/// Request body for `POST /employees/:id/promote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoteRequest {
    /// The actor performing the promotion.
    pub actor_id: Uuid,
    /// The role the employee is promoted into.
    pub new_role: String,
    /// The new compensation; must exceed the current one.
    pub new_compensation: Decimal,
    /// Free-form justification, if any.
    #[serde(default)]
    pub reason: Option<String>,
    /// Effective date; defaults to today when absent.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// Request body for `POST /employees/:id/salary-adjustments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryAdjustmentRequest {
    /// The actor recording the adjustment.
    pub actor_id: Uuid,
    /// The new compensation.
    pub new_compensation: Decimal,
    /// Free-form justification, if any.
    #[serde(default)]
    pub reason: Option<String>,
    /// Effective date; defaults to today when absent.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// One raw (name, level) rating pair as submitted by a client.
///
/// The level stays a string here; parsing and range-checking happen in
/// the validation step, which produces per-entry error messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntryRequest {
    /// The quality or defect name.
    pub name: String,
    /// The level as a raw string, e.g. `"4"` or `"3.5"`.
    pub level: String,
}

/// Request body for `POST /employees/:id/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// The actor giving the feedback.
    pub giver_id: Uuid,
    /// Free-form description; required.
    pub description: String,
    /// Feedback category label.
    pub kind: String,
    /// Overall score, 0-5 inclusive.
    pub overall_score: Decimal,
    /// Raw quality entries.
    #[serde(default)]
    pub qualities: Vec<RatingEntryRequest>,
    /// Raw defect entries.
    #[serde(default)]
    pub defects: Vec<RatingEntryRequest>,
}

/// Request body for `PUT /feedback/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFeedbackRequest {
    /// The actor requesting the update; must be the original giver or an
    /// administrator.
    pub actor_id: Uuid,
    /// Replacement description.
    pub description: String,
    /// Replacement category label.
    pub kind: String,
    /// Replacement overall score.
    pub overall_score: Decimal,
    /// Replacement quality entries.
    #[serde(default)]
    pub qualities: Vec<RatingEntryRequest>,
    /// Replacement defect entries.
    #[serde(default)]
    pub defects: Vec<RatingEntryRequest>,
}

/// Request body for `DELETE /feedback/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFeedbackRequest {
    /// The actor requesting the deletion.
    pub actor_id: Uuid,
}

/// Request body for `POST /teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    /// The team's display name.
    pub name: String,
    /// Free-form description of the team's charter.
    #[serde(default)]
    pub description: Option<String>,
    /// The actor managing the team.
    pub manager_id: Uuid,
}

/// Request body for `POST /teams/:id/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberRequest {
    /// The employee joining the team.
    pub employee_id: Uuid,
    /// The member's responsibility within the team, if any.
    #[serde(default)]
    pub responsibility: Option<String>,
}

/// Request body for `POST /milestones`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMilestoneRequest {
    /// Short title shown on the timeline.
    pub title: String,
    /// Longer description, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// The date the milestone occurred.
    pub date: NaiveDate,
    /// Free-form status label.
    pub status: String,
    /// Icon hint for the presentation layer.
    #[serde(default)]
    pub icon: Option<String>,
    /// The employee the milestone is about, if any.
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    /// The team the milestone is about, if any.
    #[serde(default)]
    pub team_id: Option<Uuid>,
    /// The actor recording the milestone.
    pub created_by: Uuid,
}

/// Request body for `PUT /milestones/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMilestoneRequest {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement date.
    pub date: NaiveDate,
    /// Replacement status label.
    pub status: String,
    /// Replacement icon hint.
    #[serde(default)]
    pub icon: Option<String>,
    /// Replacement employee reference.
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    /// Replacement team reference.
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Query parameters for `GET /kpis/employee-flow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowQuery {
    /// Size of the trailing window in days; defaults from configuration.
    #[serde(default)]
    pub window_days: Option<i64>,
}

/// Query parameters for `GET /kpis/headcount-flow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadcountQuery {
    /// Number of trailing calendar months; defaults from configuration.
    #[serde(default)]
    pub months: Option<u32>,
}

impl From<RatingEntryRequest> for RatingEntry {
    fn from(req: RatingEntryRequest) -> Self {
        RatingEntry {
            name: req.name,
            level: req.level,
        }
    }
}

impl From<HireEmployeeRequest> for NewEmployee {
    fn from(req: HireEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            role: req.role,
            compensation: req.compensation,
            entry_date: req.entry_date,
        }
    }
}

impl From<CreateTeamRequest> for NewTeam {
    fn from(req: CreateTeamRequest) -> Self {
        NewTeam {
            name: req.name,
            description: req.description,
            manager_id: req.manager_id,
        }
    }
}

impl From<FeedbackRequest> for FeedbackSubmission {
    fn from(req: FeedbackRequest) -> Self {
        FeedbackSubmission {
            giver_id: req.giver_id,
            description: req.description,
            kind: req.kind,
            overall_score: req.overall_score,
            qualities: req.qualities.into_iter().map(Into::into).collect(),
            defects: req.defects.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateMilestoneRequest> for MilestoneInput {
    fn from(req: CreateMilestoneRequest) -> Self {
        MilestoneInput {
            title: req.title,
            description: req.description,
            date: req.date,
            status: req.status,
            icon: req.icon,
            employee_id: req.employee_id,
            team_id: req.team_id,
        }
    }
}

impl From<UpdateMilestoneRequest> for MilestoneInput {
    fn from(req: UpdateMilestoneRequest) -> Self {
        MilestoneInput {
            title: req.title,
            description: req.description,
            date: req.date,
            status: req.status,
            icon: req.icon,
            employee_id: req.employee_id,
            team_id: req.team_id,
        }
    }
}

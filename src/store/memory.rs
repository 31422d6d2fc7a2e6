//! In-memory record store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Actor, ActorRole, CompensationEvent, CompensationEventKind, Employee, EmploymentStatus,
    FeedbackRecord, MembershipStatus, Milestone, RatingEntry, RatingSet, Team, TeamMembership,
    validate_overall_score,
};

/// Input for hiring a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// The employee's display name.
    pub name: String,
    /// The employee's initial role title.
    pub role: String,
    /// Initial compensation.
    pub compensation: Decimal,
    /// The date the employee enters the company.
    pub entry_date: NaiveDate,
}

/// Input for creating a team.
#[derive(Debug, Clone)]
pub struct NewTeam {
    /// The team's display name.
    pub name: String,
    /// Free-form description of the team's charter.
    pub description: Option<String>,
    /// The actor managing the team.
    pub manager_id: Uuid,
}

/// Input for creating or updating a feedback record.
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    /// The actor giving the feedback.
    pub giver_id: Uuid,
    /// Free-form description; required.
    pub description: String,
    /// Feedback category label.
    pub kind: String,
    /// Overall score, 0-5 inclusive.
    pub overall_score: Decimal,
    /// Raw quality (name, level) pairs.
    pub qualities: Vec<RatingEntry>,
    /// Raw defect (name, level) pairs.
    pub defects: Vec<RatingEntry>,
}

/// Input for creating or updating a milestone.
#[derive(Debug, Clone)]
pub struct MilestoneInput {
    /// Short title shown on the timeline.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// The date the milestone occurred.
    pub date: NaiveDate,
    /// Free-form status label.
    pub status: String,
    /// Icon hint for the presentation layer.
    pub icon: Option<String>,
    /// The employee the milestone is about, if any.
    pub employee_id: Option<Uuid>,
    /// The team the milestone is about, if any.
    pub team_id: Option<Uuid>,
}

/// A read-only copy of the collections the aggregation engine consumes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// All employee records.
    pub employees: Vec<Employee>,
    /// All teams.
    pub teams: Vec<Team>,
    /// All team memberships.
    pub memberships: Vec<TeamMembership>,
    /// The full compensation event log, in insertion order.
    pub events: Vec<CompensationEvent>,
}

#[derive(Debug, Default)]
struct State {
    actors: HashMap<Uuid, Actor>,
    employees: HashMap<Uuid, Employee>,
    teams: HashMap<Uuid, Team>,
    memberships: HashMap<Uuid, TeamMembership>,
    events: Vec<CompensationEvent>,
    feedback: HashMap<Uuid, FeedbackRecord>,
    milestones: HashMap<Uuid, Milestone>,
}

/// The in-memory record store.
///
/// All collections live behind one `RwLock`. Aggregation reads take the
/// read lock and copy a [`Snapshot`]; mutations take the write lock for the
/// whole operation, including the rolling-average recomputation that
/// follows every feedback change. A poisoned lock surfaces as
/// [`EngineError::Store`] and is never masked or retried.
#[derive(Debug, Default)]
pub struct HrStore {
    inner: RwLock<State>,
}

impl HrStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, State>> {
        self.inner.read().map_err(|_| EngineError::Store {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, State>> {
        self.inner.write().map_err(|_| EngineError::Store {
            message: "store lock poisoned".to_string(),
        })
    }

    // =========================================================================
    // Actors
    // =========================================================================

    /// Registers an actor who may perform operations against the engine.
    pub fn register_actor(&self, name: String, role: ActorRole) -> EngineResult<Actor> {
        require_non_empty("name", &name)?;
        let actor = Actor {
            id: Uuid::new_v4(),
            name,
            role,
        };
        let mut state = self.write()?;
        state.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    /// Looks up an actor by id.
    pub fn actor(&self, id: Uuid) -> EngineResult<Actor> {
        let state = self.read()?;
        state
            .actors
            .get(&id)
            .cloned()
            .ok_or(EngineError::ActorNotFound { id })
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Hires a new employee with active status.
    pub fn hire_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        require_non_empty("name", &new.name)?;
        require_non_empty("role", &new.role)?;
        if new.compensation < Decimal::ZERO {
            return Err(EngineError::InvalidField {
                field: "compensation".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let employee = Employee {
            id: Uuid::new_v4(),
            name: new.name,
            role: new.role,
            compensation: new.compensation,
            entry_date: new.entry_date,
            exit_date: None,
            status: EmploymentStatus::Active,
            average_score: None,
        };
        let mut state = self.write()?;
        state.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Soft-terminates an employee and closes their active memberships.
    ///
    /// The employee row is never deleted; the status flips and the exit
    /// date is recorded so historical logs stay valid. Every active team
    /// membership of the employee is marked inactive with today's date as
    /// the exit date.
    pub fn terminate_employee(&self, id: Uuid, today: NaiveDate) -> EngineResult<Employee> {
        let mut state = self.write()?;
        let employee = state
            .employees
            .get_mut(&id)
            .ok_or(EngineError::EmployeeNotFound { id })?;
        if employee.is_active() {
            employee.status = EmploymentStatus::Terminated;
            employee.exit_date = Some(today);
        }
        let terminated = employee.clone();

        for membership in state.memberships.values_mut() {
            if membership.employee_id == id && membership.is_active() {
                membership.status = MembershipStatus::Inactive;
                membership.exit_date = Some(today);
            }
        }
        Ok(terminated)
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: Uuid) -> EngineResult<Employee> {
        let state = self.read()?;
        state
            .employees
            .get(&id)
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }

    /// Lists all employees, sorted by name.
    pub fn employees(&self) -> EngineResult<Vec<Employee>> {
        let state = self.read()?;
        let mut employees: Vec<Employee> = state.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    // =========================================================================
    // Compensation events
    // =========================================================================

    /// Promotes an employee to a new role with a strictly higher compensation.
    ///
    /// Appends an immutable promotion event and updates the employee's role
    /// and compensation in the same write-lock scope.
    pub fn promote(
        &self,
        employee_id: Uuid,
        actor_id: Uuid,
        new_role: String,
        new_compensation: Decimal,
        reason: Option<String>,
        effective_date: NaiveDate,
    ) -> EngineResult<CompensationEvent> {
        require_non_empty("new_role", &new_role)?;
        let mut state = self.write()?;
        if !state.actors.contains_key(&actor_id) {
            return Err(EngineError::ActorNotFound { id: actor_id });
        }

        let event = {
            let employee = state
                .employees
                .get_mut(&employee_id)
                .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
            if new_compensation <= employee.compensation {
                return Err(EngineError::InvalidField {
                    field: "new_compensation".to_string(),
                    message: "must be greater than the current compensation".to_string(),
                });
            }

            let event = CompensationEvent {
                id: Uuid::new_v4(),
                employee_id,
                kind: CompensationEventKind::Promotion,
                previous_role: employee.role.clone(),
                new_role: new_role.clone(),
                previous_compensation: employee.compensation,
                new_compensation,
                effective_date,
                reason,
                actor_id,
            };
            employee.role = new_role;
            employee.compensation = new_compensation;
            event
        };
        state.events.push(event.clone());
        Ok(event)
    }

    /// Records a salary adjustment for an employee.
    ///
    /// Appends an immutable adjustment event and updates the employee's
    /// compensation. Unlike promotions, adjustments may lower compensation
    /// and never change the role.
    pub fn adjust_salary(
        &self,
        employee_id: Uuid,
        actor_id: Uuid,
        new_compensation: Decimal,
        reason: Option<String>,
        effective_date: NaiveDate,
    ) -> EngineResult<CompensationEvent> {
        if new_compensation < Decimal::ZERO {
            return Err(EngineError::InvalidField {
                field: "new_compensation".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        let mut state = self.write()?;
        if !state.actors.contains_key(&actor_id) {
            return Err(EngineError::ActorNotFound { id: actor_id });
        }

        let event = {
            let employee = state
                .employees
                .get_mut(&employee_id)
                .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
            let event = CompensationEvent {
                id: Uuid::new_v4(),
                employee_id,
                kind: CompensationEventKind::SalaryAdjustment,
                previous_role: employee.role.clone(),
                new_role: employee.role.clone(),
                previous_compensation: employee.compensation,
                new_compensation,
                effective_date,
                reason,
                actor_id,
            };
            employee.compensation = new_compensation;
            event
        };
        state.events.push(event.clone());
        Ok(event)
    }

    /// Returns an employee's compensation timeline, newest first.
    pub fn compensation_history(&self, employee_id: Uuid) -> EngineResult<Vec<CompensationEvent>> {
        let state = self.read()?;
        if !state.employees.contains_key(&employee_id) {
            return Err(EngineError::EmployeeNotFound { id: employee_id });
        }
        let mut events: Vec<CompensationEvent> = state
            .events
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        Ok(events)
    }

    // =========================================================================
    // Teams and memberships
    // =========================================================================

    /// Creates an active team.
    pub fn create_team(&self, new: NewTeam) -> EngineResult<Team> {
        require_non_empty("name", &new.name)?;
        let mut state = self.write()?;
        if !state.actors.contains_key(&new.manager_id) {
            return Err(EngineError::ActorNotFound { id: new.manager_id });
        }
        let team = Team {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            manager_id: new.manager_id,
            status: MembershipStatus::Active,
        };
        state.teams.insert(team.id, team.clone());
        Ok(team)
    }

    /// Adds an active employee to a team.
    ///
    /// Rejects inactive employees and duplicate active memberships.
    pub fn add_member(
        &self,
        team_id: Uuid,
        employee_id: Uuid,
        responsibility: Option<String>,
        today: NaiveDate,
    ) -> EngineResult<TeamMembership> {
        let mut state = self.write()?;
        if !state.teams.contains_key(&team_id) {
            return Err(EngineError::TeamNotFound { id: team_id });
        }
        let employee = state
            .employees
            .get(&employee_id)
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
        if !employee.is_active() {
            return Err(EngineError::InvalidField {
                field: "employee_id".to_string(),
                message: "employee is not active".to_string(),
            });
        }
        let duplicate = state
            .memberships
            .values()
            .any(|m| m.team_id == team_id && m.employee_id == employee_id && m.is_active());
        if duplicate {
            return Err(EngineError::InvalidField {
                field: "employee_id".to_string(),
                message: "already an active member of this team".to_string(),
            });
        }

        let membership = TeamMembership {
            id: Uuid::new_v4(),
            team_id,
            employee_id,
            responsibility,
            status: MembershipStatus::Active,
            entry_date: Some(today),
            exit_date: None,
        };
        state.memberships.insert(membership.id, membership.clone());
        Ok(membership)
    }

    /// Soft-removes a member from their team.
    pub fn remove_member(
        &self,
        membership_id: Uuid,
        today: NaiveDate,
    ) -> EngineResult<TeamMembership> {
        let mut state = self.write()?;
        let membership = state
            .memberships
            .get_mut(&membership_id)
            .ok_or(EngineError::MembershipNotFound { id: membership_id })?;
        if membership.is_active() {
            membership.status = MembershipStatus::Inactive;
            membership.exit_date = Some(today);
        }
        Ok(membership.clone())
    }

    // =========================================================================
    // Feedback / KPI store
    // =========================================================================

    /// Records feedback for an employee and recomputes their rolling average.
    ///
    /// The rating payload is validated entry by entry before the write lock
    /// is taken; the feedback insert and the average recomputation then
    /// happen under the same lock, so a read after this call always observes
    /// the updated average.
    pub fn give_feedback(
        &self,
        employee_id: Uuid,
        submission: FeedbackSubmission,
    ) -> EngineResult<FeedbackRecord> {
        require_non_empty("description", &submission.description)?;
        validate_overall_score(submission.overall_score)?;
        let ratings = RatingSet::from_entries(&submission.qualities, &submission.defects)?;

        let mut state = self.write()?;
        if !state.employees.contains_key(&employee_id) {
            return Err(EngineError::EmployeeNotFound { id: employee_id });
        }
        if !state.actors.contains_key(&submission.giver_id) {
            return Err(EngineError::ActorNotFound {
                id: submission.giver_id,
            });
        }

        let record = FeedbackRecord {
            id: Uuid::new_v4(),
            employee_id,
            giver_id: submission.giver_id,
            created_at: Utc::now(),
            description: submission.description,
            kind: submission.kind,
            overall_score: submission.overall_score,
            ratings,
        };
        state.feedback.insert(record.id, record.clone());
        Self::recompute_average(&mut state, employee_id);
        Ok(record)
    }

    /// Updates a feedback record and recomputes the owning employee's average.
    ///
    /// Only the original giver or an administrator may update; the check
    /// runs before any validation or mutation.
    pub fn update_feedback(
        &self,
        feedback_id: Uuid,
        actor_id: Uuid,
        submission: FeedbackSubmission,
    ) -> EngineResult<FeedbackRecord> {
        let mut state = self.write()?;
        let (giver_id, employee_id) = match state.feedback.get(&feedback_id) {
            Some(record) => (record.giver_id, record.employee_id),
            None => return Err(EngineError::FeedbackNotFound { id: feedback_id }),
        };
        Self::authorize_feedback_mutation(&state, giver_id, actor_id)?;

        require_non_empty("description", &submission.description)?;
        validate_overall_score(submission.overall_score)?;
        let ratings = RatingSet::from_entries(&submission.qualities, &submission.defects)?;

        let updated = {
            let record = state
                .feedback
                .get_mut(&feedback_id)
                .ok_or(EngineError::FeedbackNotFound { id: feedback_id })?;
            record.description = submission.description;
            record.kind = submission.kind;
            record.overall_score = submission.overall_score;
            record.ratings = ratings;
            record.clone()
        };
        Self::recompute_average(&mut state, employee_id);
        Ok(updated)
    }

    /// Deletes a feedback record and recomputes the owning employee's average.
    ///
    /// Only the original giver or an administrator may delete. When the last
    /// feedback for an employee is deleted, the rolling average is set to
    /// exactly 0, not back to null.
    pub fn delete_feedback(&self, feedback_id: Uuid, actor_id: Uuid) -> EngineResult<()> {
        let mut state = self.write()?;
        let (giver_id, employee_id) = match state.feedback.get(&feedback_id) {
            Some(record) => (record.giver_id, record.employee_id),
            None => return Err(EngineError::FeedbackNotFound { id: feedback_id }),
        };
        Self::authorize_feedback_mutation(&state, giver_id, actor_id)?;

        state.feedback.remove(&feedback_id);
        Self::recompute_average(&mut state, employee_id);
        Ok(())
    }

    /// Lists an employee's feedback records, newest first.
    pub fn feedback_for(&self, employee_id: Uuid) -> EngineResult<Vec<FeedbackRecord>> {
        let state = self.read()?;
        if !state.employees.contains_key(&employee_id) {
            return Err(EngineError::EmployeeNotFound { id: employee_id });
        }
        let mut records: Vec<FeedbackRecord> = state
            .feedback
            .values()
            .filter(|f| f.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn authorize_feedback_mutation(
        state: &State,
        giver_id: Uuid,
        actor_id: Uuid,
    ) -> EngineResult<()> {
        if giver_id == actor_id {
            return Ok(());
        }
        let actor = state
            .actors
            .get(&actor_id)
            .ok_or(EngineError::ActorNotFound { id: actor_id })?;
        if actor.is_admin() {
            Ok(())
        } else {
            Err(EngineError::Forbidden {
                message: "only the original giver or an administrator may modify a feedback record"
                    .to_string(),
            })
        }
    }

    /// Recomputes the rolling average from the feedback rows that exist now.
    ///
    /// Must be called with the write lock held by the mutation that changed
    /// the feedback set. An employee with no remaining feedback gets an
    /// average of exactly 0.
    fn recompute_average(state: &mut State, employee_id: Uuid) {
        let scores: Vec<Decimal> = state
            .feedback
            .values()
            .filter(|f| f.employee_id == employee_id)
            .map(|f| f.overall_score)
            .collect();

        let average = if scores.is_empty() {
            Decimal::ZERO
        } else {
            scores.iter().sum::<Decimal>() / Decimal::from(scores.len())
        };

        if let Some(employee) = state.employees.get_mut(&employee_id) {
            employee.average_score = Some(average);
        }
    }

    // =========================================================================
    // Milestones
    // =========================================================================

    /// Adds a milestone to the timeline.
    pub fn add_milestone(&self, input: MilestoneInput, created_by: Uuid) -> EngineResult<Milestone> {
        require_non_empty("title", &input.title)?;
        let mut state = self.write()?;
        Self::check_milestone_references(&state, &input)?;
        if !state.actors.contains_key(&created_by) {
            return Err(EngineError::ActorNotFound { id: created_by });
        }

        let milestone = Milestone {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            date: input.date,
            status: input.status,
            icon: input.icon,
            employee_id: input.employee_id,
            team_id: input.team_id,
            created_by,
        };
        state.milestones.insert(milestone.id, milestone.clone());
        Ok(milestone)
    }

    /// Updates an existing milestone.
    pub fn update_milestone(&self, id: Uuid, input: MilestoneInput) -> EngineResult<Milestone> {
        require_non_empty("title", &input.title)?;
        let mut state = self.write()?;
        Self::check_milestone_references(&state, &input)?;

        let milestone = state
            .milestones
            .get_mut(&id)
            .ok_or(EngineError::MilestoneNotFound { id })?;
        milestone.title = input.title;
        milestone.description = input.description;
        milestone.date = input.date;
        milestone.status = input.status;
        milestone.icon = input.icon;
        milestone.employee_id = input.employee_id;
        milestone.team_id = input.team_id;
        Ok(milestone.clone())
    }

    /// Deletes a milestone from the timeline.
    pub fn delete_milestone(&self, id: Uuid) -> EngineResult<()> {
        let mut state = self.write()?;
        state
            .milestones
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::MilestoneNotFound { id })
    }

    /// Lists all milestones, newest first.
    pub fn milestones(&self) -> EngineResult<Vec<Milestone>> {
        let state = self.read()?;
        let mut milestones: Vec<Milestone> = state.milestones.values().cloned().collect();
        milestones.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
        Ok(milestones)
    }

    fn check_milestone_references(state: &State, input: &MilestoneInput) -> EngineResult<()> {
        if let Some(id) = input.employee_id {
            if !state.employees.contains_key(&id) {
                return Err(EngineError::EmployeeNotFound { id });
            }
        }
        if let Some(id) = input.team_id {
            if !state.teams.contains_key(&id) {
                return Err(EngineError::TeamNotFound { id });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Copies the collections the aggregation engine reads.
    pub fn snapshot(&self) -> EngineResult<Snapshot> {
        let state = self.read()?;
        Ok(Snapshot {
            employees: state.employees.values().cloned().collect(),
            teams: state.teams.values().cloned().collect(),
            memberships: state.memberships.values().cloned().collect(),
            events: state.events.clone(),
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidField {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

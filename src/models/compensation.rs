//! Compensation event log models.
//!
//! A [`CompensationEvent`] is an immutable audit-log row capturing a change
//! in role and/or pay for a single employee. Events are created only by the
//! explicit promote and adjust-salary operations and are never mutated or
//! deleted afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of compensation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationEventKind {
    /// A promotion: role changes and compensation strictly increases.
    Promotion,
    /// A salary adjustment: compensation changes, role stays the same.
    SalaryAdjustment,
}

/// An immutable audit-log entry recording a change in role and/or pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationEvent {
    /// Unique identifier for the event.
    pub id: Uuid,
    /// The employee the event applies to.
    pub employee_id: Uuid,
    /// The kind of event.
    pub kind: CompensationEventKind,
    /// The employee's role before the event.
    pub previous_role: String,
    /// The employee's role after the event. Equal to `previous_role`
    /// for salary adjustments.
    pub new_role: String,
    /// Compensation before the event.
    pub previous_compensation: Decimal,
    /// Compensation after the event.
    pub new_compensation: Decimal,
    /// The date the event took effect.
    pub effective_date: NaiveDate,
    /// The stated reason for the event, if any.
    pub reason: Option<String>,
    /// The actor who performed the operation.
    pub actor_id: Uuid,
}

impl CompensationEvent {
    /// Returns true if this event is a promotion.
    pub fn is_promotion(&self) -> bool {
        self.kind == CompensationEventKind::Promotion
    }
}

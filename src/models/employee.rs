//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentStatus enum
//! for representing people in an employment capacity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the employment status of an employee.
///
/// Employees are soft-terminated: the status flips to `Terminated` and the
/// row is never hard-deleted, so historical compensation and feedback logs
/// remain valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed; counted in headcount and payroll.
    Active,
    /// No longer employed; kept for the historical record.
    Terminated,
}

/// Represents a person in an employment capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// The employee's current role title.
    pub role: String,
    /// Current compensation, currency-agnostic decimal.
    pub compensation: Decimal,
    /// The date the employee entered the company.
    pub entry_date: NaiveDate,
    /// The date the employee left the company, if terminated.
    pub exit_date: Option<NaiveDate>,
    /// The current employment status.
    pub status: EmploymentStatus,
    /// Rolling mean of the employee's feedback scores, 0-5.
    ///
    /// `None` until the first feedback exists. Recomputed synchronously
    /// after every feedback create, update, or delete; set to exactly 0
    /// when the last feedback is deleted.
    pub average_score: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::models::{Employee, EmploymentStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let employee = Employee {
    ///     id: Uuid::new_v4(),
    ///     name: "Ana Souza".to_string(),
    ///     role: "Engineer".to_string(),
    ///     compensation: Decimal::new(500000, 2),
    ///     entry_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     exit_date: None,
    ///     status: EmploymentStatus::Active,
    ///     average_score: None,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }

    /// Returns the number of days the employee has been with the company
    /// as of the given date.
    pub fn tenure_days(&self, today: NaiveDate) -> i64 {
        (today - self.entry_date).num_days()
    }
}

//! Point-in-time workforce vital metrics.
//!
//! Computes headcount, total payroll, average tenure, and the trailing
//! twelve-month turnover rate over a snapshot of the store.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, TeamMembership};

/// The trailing window, in days, over which turnover is measured.
pub const TURNOVER_WINDOW_DAYS: i64 = 365;

/// Point-in-time workforce metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalMetrics {
    /// Count of employees with active status.
    pub headcount: u64,
    /// Terminations over the trailing year divided by average headcount
    /// over that year, as a percentage. Zero when the denominator is zero.
    pub turnover_rate: f64,
    /// Mean tenure of active employees in months (days / 30). Zero when
    /// there are no active employees.
    pub avg_tenure_months: f64,
    /// Exact decimal sum of active employees' compensation.
    pub total_payroll: Decimal,
}

/// Computes vital workforce metrics for the given snapshot.
///
/// Headcount, payroll, and tenure are derived from active employees.
/// Turnover terminations are counted from team membership exit dates within
/// the trailing 365 days (memberships, not employee exit dates, are the
/// canonical termination event source). The headcount twelve months ago is
/// reconstructed from employee entry/exit dates: employees hired before the
/// cutoff who were either still active or terminated on/after the cutoff.
///
/// # Examples
///
/// ```
/// use workforce_engine::analytics::vital_metrics;
/// use workforce_engine::models::{Employee, EmploymentStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let employee = Employee {
///     id: Uuid::new_v4(),
///     name: "Ana Souza".to_string(),
///     role: "Engineer".to_string(),
///     compensation: Decimal::new(100000, 2),
///     entry_date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
///     exit_date: None,
///     status: EmploymentStatus::Active,
///     average_score: None,
/// };
///
/// let metrics = vital_metrics(&[employee], &[], today);
/// assert_eq!(metrics.headcount, 1);
/// assert_eq!(metrics.avg_tenure_months, 3.0);
/// ```
pub fn vital_metrics(
    employees: &[Employee],
    memberships: &[TeamMembership],
    today: NaiveDate,
) -> VitalMetrics {
    let active: Vec<&Employee> = employees.iter().filter(|e| e.is_active()).collect();

    let headcount = active.len() as u64;
    let total_payroll: Decimal = active.iter().map(|e| e.compensation).sum();

    let avg_tenure_months = if active.is_empty() {
        0.0
    } else {
        let total_days: i64 = active.iter().map(|e| e.tenure_days(today)).sum();
        total_days as f64 / active.len() as f64 / 30.0
    };

    let cutoff = today - Duration::days(TURNOVER_WINDOW_DAYS);

    let terminations = memberships
        .iter()
        .filter(|m| m.exit_date.is_some_and(|d| d >= cutoff && d <= today))
        .count() as f64;

    let headcount_year_ago = employees
        .iter()
        .filter(|e| {
            e.entry_date < cutoff
                && (e.is_active() || e.exit_date.is_some_and(|d| d >= cutoff))
        })
        .count() as f64;

    let average_headcount = (headcount as f64 + headcount_year_ago) / 2.0;
    let turnover_rate = if average_headcount == 0.0 {
        0.0
    } else {
        terminations / average_headcount * 100.0
    };

    VitalMetrics {
        headcount,
        turnover_rate,
        avg_tenure_months,
        total_payroll,
    }
}

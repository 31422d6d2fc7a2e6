//! Monthly hires and terminations series.
//!
//! Produces one bucket per trailing calendar month, oldest first. Buckets
//! are true calendar months: a hire on the 1st and one on the 28th of the
//! same month land in the same bucket regardless of where "today" falls.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::TeamMembership;

/// Hires and terminations for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    /// Month label in `Mon/YY` form, e.g. `"Aug/26"`.
    pub label: String,
    /// Team membership entries whose entry date falls in this month.
    pub hires: u64,
    /// Team membership exits whose exit date falls in this month.
    pub terminations: u64,
}

/// Computes the trailing calendar-month hire/termination series.
///
/// Returns one [`MonthlyFlow`] per month, oldest first, ending with the
/// month containing `today`. Hires are counted from membership entry dates,
/// terminations from membership exit dates, both by exact year/month match.
///
/// `months` must keep the walk-back within chrono's representable year
/// range; the HTTP layer caps it before calling in.
///
/// # Examples
///
/// ```
/// use workforce_engine::analytics::headcount_flow;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let series = headcount_flow(&[], today, 3);
/// let labels: Vec<&str> = series.iter().map(|m| m.label.as_str()).collect();
/// assert_eq!(labels, vec!["Jan/26", "Feb/26", "Mar/26"]);
/// ```
pub fn headcount_flow(
    memberships: &[TeamMembership],
    today: NaiveDate,
    months: u32,
) -> Vec<MonthlyFlow> {
    let mut series = Vec::with_capacity(months as usize);

    for back in (0..months).rev() {
        let (year, month) = calendar_month_back(today, back);
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .expect("first of a valid month is a valid date");

        let hires = memberships
            .iter()
            .filter(|m| m.entered_in_month(year, month))
            .count() as u64;
        let terminations = memberships
            .iter()
            .filter(|m| m.exited_in_month(year, month))
            .count() as u64;

        series.push(MonthlyFlow {
            label: first_of_month.format("%b/%y").to_string(),
            hires,
            terminations,
        });
    }

    series
}

/// Returns the (year, month) pair `back` calendar months before `today`.
fn calendar_month_back(today: NaiveDate, back: u32) -> (i32, u32) {
    let total_months = today.year() * 12 + today.month0() as i32 - back as i32;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    (year, month)
}

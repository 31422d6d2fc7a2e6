//! Aggregation engine for derived workforce metrics.
//!
//! Every function in this module is a pure, read-only computation over a
//! snapshot of the store: point-in-time vital metrics, Sankey-style employee
//! flow, the performance distribution histogram, the calendar-month
//! headcount flow series, and per-team performance averages. Nothing here
//! mutates stored entities; a backing-store error propagates to the caller
//! before these functions are ever reached.

mod employee_flow;
mod headcount_flow;
mod performance_distribution;
mod team_performance;
mod vital_metrics;

pub use employee_flow::{FlowLink, HIRE_LABEL, TERMINATION_LABEL, employee_flow};
pub use headcount_flow::{MonthlyFlow, headcount_flow};
pub use performance_distribution::{
    PerformanceDistribution, RatingBand, performance_distribution,
};
pub use team_performance::{TeamPerformance, team_performance};
pub use vital_metrics::{TURNOVER_WINDOW_DAYS, VitalMetrics, vital_metrics};

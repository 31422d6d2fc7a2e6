//! Performance distribution histogram.
//!
//! Buckets active employees by rolling average score into five fixed bands.
//! All bands are always present, in band definition order, so the output
//! shape is deterministic even when a band is empty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// A fixed performance band.
///
/// Band boundaries, applied to the rolling average score:
/// `[4.5, 5]` Excellent, `[3.5, 4.5)` Good, `[2.5, 3.5)` Average,
/// `[0, 2.5)` Below Average, and `None` Unrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    /// Rolling average of 4.5 or higher.
    Excellent,
    /// Rolling average in `[3.5, 4.5)`.
    Good,
    /// Rolling average in `[2.5, 3.5)`.
    Average,
    /// Rolling average below 2.5.
    BelowAverage,
    /// No feedback score exists yet.
    Unrated,
}

impl RatingBand {
    /// All bands in definition order.
    pub const ALL: [RatingBand; 5] = [
        RatingBand::Excellent,
        RatingBand::Good,
        RatingBand::Average,
        RatingBand::BelowAverage,
        RatingBand::Unrated,
    ];

    /// The fixed display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Excellent => "Excellent",
            RatingBand::Good => "Good",
            RatingBand::Average => "Average",
            RatingBand::BelowAverage => "Below Average",
            RatingBand::Unrated => "Unrated",
        }
    }

    /// Assigns a rolling average score to its band.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::analytics::RatingBand;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(
    ///     RatingBand::for_score(Some(Decimal::new(45, 1))),
    ///     RatingBand::Excellent
    /// );
    /// assert_eq!(RatingBand::for_score(None), RatingBand::Unrated);
    /// ```
    pub fn for_score(score: Option<Decimal>) -> RatingBand {
        let Some(score) = score else {
            return RatingBand::Unrated;
        };
        if score >= Decimal::new(45, 1) {
            RatingBand::Excellent
        } else if score >= Decimal::new(35, 1) {
            RatingBand::Good
        } else if score >= Decimal::new(25, 1) {
            RatingBand::Average
        } else {
            RatingBand::BelowAverage
        }
    }
}

/// Parallel label and count arrays describing the histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceDistribution {
    /// Band labels, in band definition order.
    pub labels: Vec<String>,
    /// Count of active employees per band, parallel to `labels`.
    pub counts: Vec<u64>,
}

/// Buckets active employees by rolling average score.
///
/// Terminated employees are excluded. The sum of all counts equals the
/// active headcount.
pub fn performance_distribution(employees: &[Employee]) -> PerformanceDistribution {
    let mut counts = [0u64; RatingBand::ALL.len()];

    for employee in employees.iter().filter(|e| e.is_active()) {
        let band = RatingBand::for_score(employee.average_score);
        let index = RatingBand::ALL
            .iter()
            .position(|b| *b == band)
            .expect("every band is listed in ALL");
        counts[index] += 1;
    }

    PerformanceDistribution {
        labels: RatingBand::ALL.iter().map(|b| b.label().to_string()).collect(),
        counts: counts.to_vec(),
    }
}

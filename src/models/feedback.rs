//! Feedback record and semi-structured rating models.
//!
//! A feedback record carries a numeric overall score (0-5 inclusive) and an
//! optional [`RatingSet`]: free-form quality and defect dimensions supplied
//! as variable-length (name, level) pairs and validated field by field
//! before persistence.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Returns the maximum accepted value for overall scores and rating levels.
pub fn max_score() -> Decimal {
    Decimal::from(5)
}

/// Validates that an overall feedback score lies within `[0, 5]`.
///
/// # Examples
///
/// ```
/// use workforce_engine::models::validate_overall_score;
/// use rust_decimal::Decimal;
///
/// assert!(validate_overall_score(Decimal::new(45, 1)).is_ok());
/// assert!(validate_overall_score(Decimal::from(6)).is_err());
/// ```
pub fn validate_overall_score(score: Decimal) -> EngineResult<()> {
    if score < Decimal::ZERO || score > max_score() {
        return Err(EngineError::InvalidScore {
            value: score.to_string(),
        });
    }
    Ok(())
}

/// One raw (name, level) pair supplied for a rating category.
///
/// The level is kept as the caller's original string so that blank rows can
/// be skipped and parse failures can be reported against the entry name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    /// The rating dimension name (e.g. "Communication").
    pub name: String,
    /// The rating level as supplied, expected to parse to a number in `[0, 5]`.
    pub level: String,
}

/// Validated free-form rating dimensions attached to a feedback record.
///
/// Maps are ordered (`BTreeMap`) so persisted payloads serialize
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSet {
    /// Named quality dimensions, each with a level in `[0, 5]`.
    pub qualities: BTreeMap<String, Decimal>,
    /// Named defect dimensions, each with a level in `[0, 5]`.
    pub defects: BTreeMap<String, Decimal>,
}

impl RatingSet {
    /// Builds a validated rating set from raw (name, level) pairs.
    ///
    /// Validation rules, applied per pair and in order:
    ///
    /// 1. Both name and level must be non-empty after trimming; pairs
    ///    failing this are silently skipped (sparse rows are tolerated).
    /// 2. The level must parse as a number; failure rejects the whole
    ///    submission, naming the offending entry.
    /// 3. The level must lie in `[0, 5]` inclusive; a value outside the
    ///    range rejects the whole submission, naming entry and category.
    ///
    /// Returns `Ok(None)` when both maps are empty after filtering: absence
    /// and "explicitly empty" are not distinguished.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::models::{RatingEntry, RatingSet};
    /// use rust_decimal::Decimal;
    ///
    /// let qualities = vec![RatingEntry {
    ///     name: "Teamwork".to_string(),
    ///     level: "4".to_string(),
    /// }];
    /// let ratings = RatingSet::from_entries(&qualities, &[]).unwrap().unwrap();
    /// assert_eq!(ratings.qualities["Teamwork"], Decimal::from(4));
    /// assert!(ratings.defects.is_empty());
    /// ```
    pub fn from_entries(
        qualities: &[RatingEntry],
        defects: &[RatingEntry],
    ) -> EngineResult<Option<Self>> {
        let qualities = parse_category(qualities, "quality")?;
        let defects = parse_category(defects, "defect")?;

        if qualities.is_empty() && defects.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { qualities, defects }))
    }

    /// Returns true if both category maps are empty.
    pub fn is_empty(&self) -> bool {
        self.qualities.is_empty() && self.defects.is_empty()
    }
}

/// Parses and validates the entries of a single rating category.
fn parse_category(
    entries: &[RatingEntry],
    category: &str,
) -> EngineResult<BTreeMap<String, Decimal>> {
    let mut levels = BTreeMap::new();

    for entry in entries {
        let name = entry.name.trim();
        let level_str = entry.level.trim();
        if name.is_empty() || level_str.is_empty() {
            continue;
        }

        let level =
            Decimal::from_str(level_str).map_err(|_| EngineError::InvalidRating {
                category: category.to_string(),
                name: name.to_string(),
                message: "must be a number".to_string(),
            })?;

        if level < Decimal::ZERO || level > max_score() {
            return Err(EngineError::InvalidRating {
                category: category.to_string(),
                name: name.to_string(),
                message: "must be between 0 and 5".to_string(),
            });
        }

        levels.insert(name.to_string(), level);
    }

    Ok(levels)
}

/// A scored evaluation of an employee, optionally carrying semi-structured
/// rating dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique identifier for the feedback record.
    pub id: Uuid,
    /// The employee the feedback is about.
    pub employee_id: Uuid,
    /// The actor who gave the feedback.
    pub giver_id: Uuid,
    /// When the feedback was first recorded.
    pub created_at: DateTime<Utc>,
    /// Free-form description of the feedback.
    pub description: String,
    /// Feedback category label (e.g. "one_on_one", "general").
    pub kind: String,
    /// Overall score, 0-5 inclusive.
    pub overall_score: Decimal,
    /// Optional validated rating dimensions; `None` when none were supplied.
    pub ratings: Option<RatingSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, level: &str) -> RatingEntry {
        RatingEntry {
            name: name.to_string(),
            level: level.to_string(),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Overall score validation
    // ==========================================================================

    #[test]
    fn test_score_zero_is_valid() {
        assert!(validate_overall_score(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_score_five_is_valid() {
        assert!(validate_overall_score(Decimal::from(5)).is_ok());
    }

    #[test]
    fn test_score_above_five_is_rejected() {
        let err = validate_overall_score(dec("5.1")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore { .. }));
    }

    #[test]
    fn test_negative_score_is_rejected() {
        let err = validate_overall_score(dec("-0.5")).unwrap_err();
        assert!(matches!(err, EngineError::InvalidScore { .. }));
    }

    // ==========================================================================
    // Rating payload validation
    // ==========================================================================

    #[test]
    fn test_valid_quality_is_stored() {
        let ratings = RatingSet::from_entries(&[entry("Communication", "4.5")], &[])
            .unwrap()
            .unwrap();
        assert_eq!(ratings.qualities["Communication"], dec("4.5"));
        assert!(ratings.defects.is_empty());
    }

    #[test]
    fn test_blank_level_is_silently_skipped() {
        let result = RatingSet::from_entries(&[entry("Communication", "")], &[]).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_blank_name_is_silently_skipped() {
        let result = RatingSet::from_entries(&[entry("   ", "4")], &[]).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_level_above_range_rejects_submission() {
        let err = RatingSet::from_entries(&[entry("Communication", "6")], &[]).unwrap_err();
        match err {
            EngineError::InvalidRating {
                category,
                name,
                message,
            } => {
                assert_eq!(category, "quality");
                assert_eq!(name, "Communication");
                assert_eq!(message, "must be between 0 and 5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_level_rejects_submission() {
        let err =
            RatingSet::from_entries(&[], &[entry("Punctuality", "often")]).unwrap_err();
        match err {
            EngineError::InvalidRating { category, name, .. } => {
                assert_eq!(category, "defect");
                assert_eq!(name, "Punctuality");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_names_and_levels_are_trimmed() {
        let ratings = RatingSet::from_entries(&[entry("  Teamwork  ", " 4 ")], &[])
            .unwrap()
            .unwrap();
        assert_eq!(ratings.qualities["Teamwork"], Decimal::from(4));
    }

    #[test]
    fn test_all_blank_pairs_yield_absent_payload() {
        let result =
            RatingSet::from_entries(&[entry("", ""), entry(" ", " ")], &[entry("", "3")])
                .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_valid_pairs_survive_alongside_skipped_ones() {
        let ratings = RatingSet::from_entries(
            &[entry("Communication", "4"), entry("", "")],
            &[entry("Rushing", "2")],
        )
        .unwrap()
        .unwrap();
        assert_eq!(ratings.qualities.len(), 1);
        assert_eq!(ratings.defects["Rushing"], Decimal::from(2));
    }

    #[test]
    fn test_rating_set_round_trip() {
        let ratings = RatingSet::from_entries(&[entry("Teamwork", "4")], &[])
            .unwrap()
            .unwrap();
        let json = serde_json::to_string(&ratings).unwrap();
        let reloaded: RatingSet = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.qualities["Teamwork"], Decimal::from(4));
        assert!(reloaded.defects.is_empty());
        assert_eq!(ratings, reloaded);
    }

    #[test]
    fn test_boundary_levels_are_accepted() {
        let ratings = RatingSet::from_entries(
            &[entry("Low", "0"), entry("High", "5")],
            &[],
        )
        .unwrap()
        .unwrap();
        assert_eq!(ratings.qualities["Low"], Decimal::ZERO);
        assert_eq!(ratings.qualities["High"], Decimal::from(5));
    }
}

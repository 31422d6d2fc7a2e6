//! Employee flow derivation for Sankey-style charts.
//!
//! Produces an ordered list of `(source, target, weight)` links describing
//! role movement over a trailing window: promotions grouped by role pair,
//! then hires grouped by entry role, then terminations grouped by exit role.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CompensationEvent, Employee, TeamMembership};

/// Source label for hire links.
pub const HIRE_LABEL: &str = "Hire";
/// Target label for termination links.
pub const TERMINATION_LABEL: &str = "Termination";

/// One weighted link in the employee flow diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    /// The source node label.
    pub source: String,
    /// The target node label.
    pub target: String,
    /// Number of employees who made this transition; always at least 1.
    pub weight: u64,
}

/// Derives the employee flow links for the trailing window.
///
/// Three groups are concatenated, in order:
///
/// 1. `(previous_role, new_role, count)` from promotion events whose
///    effective date falls within the window, grouped by role pair.
///    Salary adjustments never change roles and are not included.
/// 2. `("Hire", role, count)` from employees whose entry date falls within
///    the window, grouped by role.
/// 3. `(role, "Termination", count)` from team memberships whose exit date
///    falls within the window, joined back to the employee's current role,
///    grouped by role. Memberships whose employee is absent from the
///    snapshot are dropped (inner-join semantics).
///
/// Within each group, links are emitted in sorted label order so output is
/// deterministic. Groups with a zero count are never emitted.
pub fn employee_flow(
    employees: &[Employee],
    memberships: &[TeamMembership],
    events: &[CompensationEvent],
    today: NaiveDate,
    window_days: i64,
) -> Vec<FlowLink> {
    let cutoff = today - Duration::days(window_days);
    let in_window = |date: NaiveDate| date >= cutoff && date <= today;

    let mut links = Vec::new();

    let mut promotions: BTreeMap<(String, String), u64> = BTreeMap::new();
    for event in events {
        if event.is_promotion() && in_window(event.effective_date) {
            *promotions
                .entry((event.previous_role.clone(), event.new_role.clone()))
                .or_insert(0) += 1;
        }
    }
    for ((source, target), weight) in promotions {
        links.push(FlowLink {
            source,
            target,
            weight,
        });
    }

    let mut hires: BTreeMap<String, u64> = BTreeMap::new();
    for employee in employees {
        if in_window(employee.entry_date) {
            *hires.entry(employee.role.clone()).or_insert(0) += 1;
        }
    }
    for (role, weight) in hires {
        links.push(FlowLink {
            source: HIRE_LABEL.to_string(),
            target: role,
            weight,
        });
    }

    let by_id: HashMap<Uuid, &Employee> = employees.iter().map(|e| (e.id, e)).collect();
    let mut terminations: BTreeMap<String, u64> = BTreeMap::new();
    for membership in memberships {
        if membership.exit_date.is_some_and(in_window) {
            if let Some(employee) = by_id.get(&membership.employee_id) {
                *terminations.entry(employee.role.clone()).or_insert(0) += 1;
            }
        }
    }
    for (role, weight) in terminations {
        links.push(FlowLink {
            source: role,
            target: TERMINATION_LABEL.to_string(),
            weight,
        });
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompensationEventKind, EmploymentStatus, MembershipStatus};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::from_str(s).unwrap()
    }

    fn employee(id: Uuid, role: &str, entry: &str) -> Employee {
        Employee {
            id,
            name: "Test".to_string(),
            role: role.to_string(),
            compensation: Decimal::new(100000, 2),
            entry_date: make_date(entry),
            exit_date: None,
            status: EmploymentStatus::Active,
            average_score: None,
        }
    }

    fn promotion(from: &str, to: &str, date: &str) -> CompensationEvent {
        CompensationEvent {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            kind: CompensationEventKind::Promotion,
            previous_role: from.to_string(),
            new_role: to.to_string(),
            previous_compensation: Decimal::new(100000, 2),
            new_compensation: Decimal::new(120000, 2),
            effective_date: make_date(date),
            reason: None,
            actor_id: Uuid::new_v4(),
        }
    }

    fn exit_membership(employee_id: Uuid, exit: &str) -> TeamMembership {
        TeamMembership {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            employee_id,
            responsibility: None,
            status: MembershipStatus::Inactive,
            entry_date: None,
            exit_date: Some(make_date(exit)),
        }
    }

    // ==========================================================================
    // EF-001: promotions within the window are grouped by role pair
    // ==========================================================================
    #[test]
    fn test_ef_001_promotions_grouped_by_role_pair() {
        let events = vec![
            promotion("Engineer", "Senior Engineer", "2025-09-01"),
            promotion("Engineer", "Senior Engineer", "2025-10-01"),
            promotion("Analyst", "Senior Analyst", "2025-11-01"),
        ];

        let links = employee_flow(&[], &[], &events, make_date("2026-01-01"), 365);
        assert_eq!(
            links,
            vec![
                FlowLink {
                    source: "Analyst".to_string(),
                    target: "Senior Analyst".to_string(),
                    weight: 1,
                },
                FlowLink {
                    source: "Engineer".to_string(),
                    target: "Senior Engineer".to_string(),
                    weight: 2,
                },
            ]
        );
    }

    // ==========================================================================
    // EF-002: hires within the window map from the Hire node
    // ==========================================================================
    #[test]
    fn test_ef_002_hires_grouped_by_role() {
        let employees = vec![
            employee(Uuid::new_v4(), "Engineer", "2025-08-01"),
            employee(Uuid::new_v4(), "Engineer", "2025-09-01"),
            employee(Uuid::new_v4(), "Designer", "2023-01-01"), // outside window
        ];

        let links = employee_flow(&employees, &[], &[], make_date("2026-01-01"), 365);
        assert_eq!(
            links,
            vec![FlowLink {
                source: HIRE_LABEL.to_string(),
                target: "Engineer".to_string(),
                weight: 2,
            }]
        );
    }

    // ==========================================================================
    // EF-003: terminations join membership exits back to employee roles
    // ==========================================================================
    #[test]
    fn test_ef_003_terminations_join_to_roles() {
        let id = Uuid::new_v4();
        let employees = vec![employee(id, "Engineer", "2020-01-01")];
        let memberships = vec![exit_membership(id, "2025-07-01")];

        let links = employee_flow(&employees, &memberships, &[], make_date("2026-01-01"), 365);
        assert_eq!(
            links,
            vec![FlowLink {
                source: "Engineer".to_string(),
                target: TERMINATION_LABEL.to_string(),
                weight: 1,
            }]
        );
    }

    // ==========================================================================
    // EF-004: group order is promotions, then hires, then terminations
    // ==========================================================================
    #[test]
    fn test_ef_004_group_ordering() {
        let id = Uuid::new_v4();
        let employees = vec![employee(id, "Engineer", "2025-08-01")];
        let memberships = vec![exit_membership(id, "2025-07-01")];
        let events = vec![promotion("Analyst", "Senior Analyst", "2025-09-01")];

        let links = employee_flow(
            &employees,
            &memberships,
            &events,
            make_date("2026-01-01"),
            365,
        );

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].source, "Analyst");
        assert_eq!(links[1].source, HIRE_LABEL);
        assert_eq!(links[2].target, TERMINATION_LABEL);
    }

    // ==========================================================================
    // EF-005: no link ever carries a zero weight
    // ==========================================================================
    #[test]
    fn test_ef_005_no_zero_weights() {
        let id = Uuid::new_v4();
        let employees = vec![employee(id, "Engineer", "2025-08-01")];
        let memberships = vec![exit_membership(id, "2025-07-01")];
        let events = vec![
            promotion("Analyst", "Senior Analyst", "2025-09-01"),
            promotion("Analyst", "Senior Analyst", "2020-01-01"), // outside window
        ];

        let links = employee_flow(
            &employees,
            &memberships,
            &events,
            make_date("2026-01-01"),
            365,
        );
        assert!(links.iter().all(|l| l.weight >= 1));
    }

    // ==========================================================================
    // EF-006: a narrower window excludes older events
    // ==========================================================================
    #[test]
    fn test_ef_006_window_is_respected() {
        let events = vec![promotion("Engineer", "Senior Engineer", "2025-09-01")];

        let links = employee_flow(&[], &[], &events, make_date("2026-01-01"), 30);
        assert!(links.is_empty());
    }

    // ==========================================================================
    // EF-007: membership exits without a matching employee are dropped
    // ==========================================================================
    #[test]
    fn test_ef_007_orphan_membership_is_dropped() {
        let memberships = vec![exit_membership(Uuid::new_v4(), "2025-07-01")];

        let links = employee_flow(&[], &memberships, &[], make_date("2026-01-01"), 365);
        assert!(links.is_empty());
    }
}

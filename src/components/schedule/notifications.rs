use super::models::Shift;
use crate::components::team::roster::TeamRoster;
use crate::utils::time::day_label;
use std::collections::BTreeMap;

/// Build one publish summary line per affected employee.
///
/// Formatting only; nothing is delivered. Lines come out sorted by
/// employee name so output is deterministic.
pub fn publish_summaries(approved: &[Shift], roster: &TeamRoster) -> Vec<String> {
    let mut by_employee: BTreeMap<String, Vec<&Shift>> = BTreeMap::new();

    for shift in approved {
        let name = shift
            .employee_id
            .as_deref()
            .and_then(|id| roster.member_name(id))
            .unwrap_or("Unassigned")
            .to_string();
        by_employee.entry(name).or_default().push(shift);
    }

    by_employee
        .into_iter()
        .map(|(name, shifts)| {
            let details = shifts
                .iter()
                .map(|s| format!("{} ({}) {}", day_label(s.date), s.date, s.time_range()))
                .collect::<Vec<_>>()
                .join(", ");
            let label = if shifts.len() == 1 { "shift" } else { "shifts" };
            format!("{}: {} {} approved — {}", name, shifts.len(), label, details)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::models::ShiftDraft;
    use super::super::store::ShiftStore;
    use crate::components::team::models::TeamMember;
    use chrono::NaiveDate;

    #[test]
    fn test_summaries_group_by_employee() {
        let roster = TeamRoster::new(
            vec![
                TeamMember::new("emp1", "Sarah Johnson", "Manager", 40),
                TeamMember::new("emp2", "Michael Chen", "Cashier", 32),
            ],
            vec![],
        );

        let mut store = ShiftStore::new();
        let date = |d| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
        for (employee, day) in [("emp1", 2), ("emp1", 3), ("emp2", 2)] {
            let mut draft = ShiftDraft::new(date(day), "09:00", "17:00", "Cashier");
            draft.employee_id = Some(employee.to_string());
            store.create(draft).unwrap();
        }
        store.publish();

        let summaries = publish_summaries(store.shifts(), &roster);
        assert_eq!(summaries.len(), 2);
        // Sorted by name: Michael before Sarah
        assert!(summaries[0].starts_with("Michael Chen: 1 shift approved"));
        assert!(summaries[1].starts_with("Sarah Johnson: 2 shifts approved"));
        assert!(summaries[1].contains("Mon (2023-01-02) 09:00 - 17:00"));
    }

    #[test]
    fn test_unknown_employee_reported_as_unassigned() {
        let roster = TeamRoster::default();
        let mut store = ShiftStore::new();
        let mut draft = ShiftDraft::new(
            NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            "09:00",
            "17:00",
            "Cashier",
        );
        draft.employee_id = Some("emp99".to_string());
        store.create(draft).unwrap();

        let summaries = publish_summaries(store.shifts(), &roster);
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].starts_with("Unassigned:"));
    }
}

use super::models::Shift;
use super::time::shift_interval;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Flag every shift that overlaps another shift for the same employee
/// on the same day.
///
/// Pure function: the input is not mutated, and a fresh vector with
/// recomputed `conflict` flags is returned. Intervals are half-open, so
/// back-to-back shifts do not conflict. All members of an overlapping
/// pair are flagged equally; no precedence is assigned.
pub fn annotate_conflicts(shifts: &[Shift]) -> Vec<Shift> {
    let mut annotated: Vec<Shift> = shifts.to_vec();
    let mut flagged = vec![false; annotated.len()];

    // Group by (employee, day); open shifts have nobody to conflict with
    let mut groups: HashMap<(String, NaiveDate), Vec<usize>> = HashMap::new();
    for (index, shift) in annotated.iter().enumerate() {
        if let Some(employee_id) = &shift.employee_id {
            groups
                .entry((employee_id.clone(), shift.date))
                .or_default()
                .push(index);
        }
    }

    for indices in groups.values() {
        for (offset, &a) in indices.iter().enumerate() {
            for &b in &indices[offset + 1..] {
                if overlaps(&annotated[a], &annotated[b]) {
                    flagged[a] = true;
                    flagged[b] = true;
                }
            }
        }
    }

    for (shift, conflict) in annotated.iter_mut().zip(flagged) {
        shift.conflict = conflict;
    }

    annotated
}

fn overlaps(a: &Shift, b: &Shift) -> bool {
    // Shifts with unparseable times cannot overlap anything
    let (Ok((a_start, a_end)), Ok((b_start, b_end))) = (
        shift_interval(&a.start_time, &a.end_time),
        shift_interval(&b.start_time, &b.end_time),
    ) else {
        return false;
    };

    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::models::ShiftDraft;
    use super::super::store::ShiftStore;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    fn shift(employee: &str, d: u32, start: &str, end: &str) -> Shift {
        let mut store = ShiftStore::new();
        let mut draft = ShiftDraft::new(date(d), start, end, "Cashier");
        draft.employee_id = Some(employee.to_string());
        store.create(draft).unwrap()
    }

    #[test]
    fn test_overlapping_pair_both_flagged() {
        // Monday 09:00-17:00 and Monday 12:00-20:00 overlap;
        // Tuesday 09:00-17:00 does not
        let shifts = vec![
            shift("emp1", 2, "09:00", "17:00"),
            shift("emp1", 2, "12:00", "20:00"),
            shift("emp1", 3, "09:00", "17:00"),
        ];

        let annotated = annotate_conflicts(&shifts);
        assert!(annotated[0].conflict);
        assert!(annotated[1].conflict);
        assert!(!annotated[2].conflict);
    }

    #[test]
    fn test_different_employees_never_conflict() {
        let shifts = vec![
            shift("emp1", 2, "09:00", "17:00"),
            shift("emp2", 2, "09:00", "17:00"),
        ];

        let annotated = annotate_conflicts(&shifts);
        assert!(annotated.iter().all(|s| !s.conflict));
    }

    #[test]
    fn test_adjacent_shifts_do_not_conflict() {
        let shifts = vec![
            shift("emp1", 2, "09:00", "13:00"),
            shift("emp1", 2, "13:00", "17:00"),
        ];

        let annotated = annotate_conflicts(&shifts);
        assert!(annotated.iter().all(|s| !s.conflict));
    }

    #[test]
    fn test_overnight_shift_overlaps_late_evening() {
        // 22:00-06:00 spans past midnight; 23:00-23:30 sits inside it
        let shifts = vec![
            shift("emp1", 2, "22:00", "06:00"),
            shift("emp1", 2, "23:00", "23:30"),
        ];

        let annotated = annotate_conflicts(&shifts);
        assert!(annotated[0].conflict);
        assert!(annotated[1].conflict);
    }

    #[test]
    fn test_stale_flags_are_cleared() {
        let mut stale = shift("emp1", 2, "09:00", "17:00");
        stale.conflict = true;

        let annotated = annotate_conflicts(&[stale]);
        assert!(!annotated[0].conflict);
    }

    #[test]
    fn test_idempotent() {
        let shifts = vec![
            shift("emp1", 2, "09:00", "17:00"),
            shift("emp1", 2, "12:00", "20:00"),
            shift("emp2", 2, "08:00", "12:00"),
        ];

        let once = annotate_conflicts(&shifts);
        let twice = annotate_conflicts(&once);
        assert_eq!(once, twice);
    }
}

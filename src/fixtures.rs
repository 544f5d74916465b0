use crate::components::schedule::models::ShiftDraft;
use crate::components::team::models::{Position, TeamMember};
use crate::components::team::roster::TeamRoster;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MEMBER_NAMES: &[&str] = &[
    "Sarah Johnson",
    "Michael Chen",
    "Emma Garcia",
    "James Wilson",
    "Olivia Martinez",
    "Liam Patel",
    "Ava Thompson",
    "Noah Kim",
    "Mia Rossi",
    "Ethan Brooks",
];

const POSITION_NAMES: &[&str] = &[
    "Manager",
    "Assistant Manager",
    "Shift Lead",
    "Cashier",
    "Stock Clerk",
    "Customer Service",
];

// (label, start, end); the last two are overnight
const SHIFT_TEMPLATES: &[(&str, &str, &str)] = &[
    ("Morning", "08:00", "16:00"),
    ("Afternoon", "12:00", "20:00"),
    ("Evening", "16:00", "00:00"),
    ("Night", "22:00", "06:00"),
];

/// Generate a deterministic roster for the given seed.
///
/// The same seed always produces the same members; `team_size` is
/// capped by the fixed name pool.
pub fn seeded_roster(seed: u64, team_size: usize) -> TeamRoster {
    let mut rng = StdRng::seed_from_u64(seed);

    let members = MEMBER_NAMES
        .iter()
        .take(team_size.min(MEMBER_NAMES.len()))
        .enumerate()
        .map(|(index, name)| {
            let position = POSITION_NAMES[rng.random_range(0..POSITION_NAMES.len())];
            let hours = rng.random_range(16..=40);
            TeamMember::new(format!("emp{}", index + 1), *name, position, hours)
        })
        .collect();

    let positions = POSITION_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| Position {
            id: format!("pos{}", index + 1),
            name: (*name).to_string(),
        })
        .collect();

    TeamRoster::new(members, positions)
}

/// Generate a deterministic week of shift drafts for the roster.
///
/// Three to five shifts per member across the week starting at
/// `week_monday`, drawn from fixed shift templates; roughly one in five
/// is left unassigned (an open shift) and some carry a note.
pub fn seeded_shifts(seed: u64, roster: &TeamRoster, week_monday: NaiveDate) -> Vec<ShiftDraft> {
    // Distinct stream from the roster's so the two can evolve independently
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut drafts = Vec::new();

    for member in roster.members() {
        let count = rng.random_range(3..=5);
        for _ in 0..count {
            let day_offset = rng.random_range(0..7);
            let date = week_monday
                .checked_add_signed(Duration::days(day_offset))
                .unwrap_or(week_monday);

            let (_, start_time, end_time) =
                SHIFT_TEMPLATES[rng.random_range(0..SHIFT_TEMPLATES.len())];

            let mut draft = ShiftDraft::new(date, start_time, end_time, member.position.clone());
            if !rng.random_bool(0.2) {
                draft.employee_id = Some(member.id.clone());
            }
            if rng.random_bool(0.3) {
                draft.note = Some("Priority shift".to_string());
            }
            drafts.push(draft);
        }
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
    }

    #[test]
    fn test_roster_is_deterministic() {
        let a = seeded_roster(2024, 5);
        let b = seeded_roster(2024, 5);
        assert_eq!(a.members(), b.members());
        assert_eq!(a.positions(), b.positions());

        let c = seeded_roster(2025, 5);
        assert_ne!(a.members(), c.members());
    }

    #[test]
    fn test_roster_respects_team_size() {
        assert_eq!(seeded_roster(2024, 3).len(), 3);
        // Capped by the name pool
        assert_eq!(seeded_roster(2024, 500).len(), MEMBER_NAMES.len());
    }

    #[test]
    fn test_shifts_are_deterministic_and_within_week() {
        let roster = seeded_roster(2024, 5);
        let a = seeded_shifts(2024, &roster, monday());
        let b = seeded_shifts(2024, &roster, monday());
        assert_eq!(a, b);

        let sunday = NaiveDate::from_ymd_opt(2023, 1, 8).unwrap();
        assert!(a.iter().all(|d| d.date >= monday() && d.date <= sunday));

        // 3 to 5 shifts per member
        assert!(a.len() >= 3 * roster.len() && a.len() <= 5 * roster.len());
    }

    #[test]
    fn test_shift_templates_have_valid_times() {
        use crate::components::schedule::time::compute_duration;

        for (_, start, end) in SHIFT_TEMPLATES {
            assert!(compute_duration(start, end).is_ok());
        }
    }
}

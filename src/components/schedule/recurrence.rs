use super::models::{Shift, ShiftDraft};
use crate::utils::time::{week_dates, week_monday};
use chrono::NaiveDate;

/// How a template shift is applied across days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Duplicate the template on its own day
    SingleDay,
    /// One copy per day of the template's week, excluding its own day
    WholeWeek,
}

/// Expand a template shift into drafts for the target days.
///
/// Pure data transformation: the drafts carry no identity and nothing
/// is written anywhere; callers pipe the output into the store's
/// `create`. With `WholeWeek`, `selected_days` narrows the canonical
/// Monday-start week to an explicit subset (the modal's "Apply To"
/// toggles); the template's own day is always excluded.
pub fn expand(
    template: &Shift,
    mode: ApplyMode,
    selected_days: Option<&[NaiveDate]>,
) -> Vec<ShiftDraft> {
    match mode {
        ApplyMode::SingleDay => vec![draft_from(template, template.date)],
        ApplyMode::WholeWeek => {
            let days = match selected_days {
                Some(days) => days.to_vec(),
                None => week_dates(week_monday(template.date)),
            };
            days.into_iter()
                .filter(|day| *day != template.date)
                .map(|day| draft_from(template, day))
                .collect()
        }
    }
}

fn draft_from(template: &Shift, date: NaiveDate) -> ShiftDraft {
    let mut draft = ShiftDraft::new(
        date,
        template.start_time.clone(),
        template.end_time.clone(),
        template.position.clone(),
    );
    draft.employee_id = template.employee_id.clone();
    draft.note = template.note.clone();
    // Covering relations belong to the original day and do not recur
    draft
}

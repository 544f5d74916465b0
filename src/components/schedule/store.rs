use super::models::{Shift, ShiftDraft, ShiftPatch, ShiftStatus, StatusKind};
use super::time::compute_duration;
use crate::error::{not_found_error, validation_error, ScheduleResult};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

/// In-memory ordered collection of shifts, keyed by id.
///
/// All mutation funnels through the named operations below; invalid
/// input and unknown ids are surfaced as errors rather than no-ops.
#[derive(Debug, Default)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All shifts in insertion order
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Look up a shift by id
    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Number of shifts awaiting publish
    pub fn pending_count(&self) -> usize {
        self.shifts.iter().filter(|s| s.is_pending()).count()
    }

    /// Create a new shift from a draft.
    ///
    /// Assigns a fresh id, computes the duration from the time pair and
    /// defaults the status to pending, or posted when no employee is
    /// assigned.
    pub fn create(&mut self, draft: ShiftDraft) -> ScheduleResult<Shift> {
        if draft.position.trim().is_empty() {
            return Err(validation_error("position is required"));
        }
        let duration = compute_duration(&draft.start_time, &draft.end_time)?;

        let kind = draft.status.unwrap_or(if draft.employee_id.is_some() {
            StatusKind::Pending
        } else {
            StatusKind::Posted
        });

        let shift = Shift {
            id: Uuid::new_v4().to_string(),
            employee_id: draft.employee_id,
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            position: draft.position,
            duration,
            status: ShiftStatus::new(kind),
            note: draft.note,
            covering: draft.covering,
            conflict: false,
        };

        debug!("Created shift {} on {}", shift.id, shift.date);
        self.shifts.push(shift.clone());
        Ok(shift)
    }

    /// Merge a patch into an existing shift, recomputing the duration
    /// when either time changed
    pub fn update(&mut self, id: &str, patch: ShiftPatch) -> ScheduleResult<Shift> {
        // Validate the new time pair before touching the record
        let current = self.get(id).ok_or_else(|| not_found_error(id))?;
        let start_time = patch
            .start_time
            .clone()
            .unwrap_or_else(|| current.start_time.clone());
        let end_time = patch
            .end_time
            .clone()
            .unwrap_or_else(|| current.end_time.clone());
        let duration = compute_duration(&start_time, &end_time)?;

        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found_error(id))?;

        if let Some(employee_id) = patch.employee_id {
            shift.employee_id = employee_id;
        }
        if let Some(date) = patch.date {
            shift.date = date;
        }
        if let Some(position) = patch.position {
            shift.position = position;
        }
        if let Some(kind) = patch.status {
            shift.status = ShiftStatus::new(kind);
        }
        if let Some(note) = patch.note {
            shift.note = note;
        }
        if let Some(covering) = patch.covering {
            shift.covering = covering;
        }
        shift.start_time = start_time;
        shift.end_time = end_time;
        shift.duration = duration;

        Ok(shift.clone())
    }

    /// Remove a shift by id
    pub fn delete(&mut self, id: &str) -> ScheduleResult<()> {
        let index = self
            .shifts
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found_error(id))?;
        self.shifts.remove(index);
        Ok(())
    }

    /// Clone a template shift onto each target date.
    ///
    /// The template's own date is skipped. Copies take the template's
    /// employee, times, position and note with fresh ids and pending
    /// status; covering relations and conflict flags do not carry over.
    pub fn bulk_copy(
        &mut self,
        template_id: &str,
        target_dates: &[NaiveDate],
    ) -> ScheduleResult<Vec<Shift>> {
        let template = self
            .get(template_id)
            .cloned()
            .ok_or_else(|| not_found_error(template_id))?;

        let mut created = Vec::new();
        for &date in target_dates {
            if date == template.date {
                continue;
            }
            let mut draft = ShiftDraft::new(
                date,
                template.start_time.clone(),
                template.end_time.clone(),
                template.position.clone(),
            );
            draft.employee_id = template.employee_id.clone();
            draft.note = template.note.clone();
            created.push(self.create(draft)?);
        }

        debug!(
            "Copied shift {} to {} target dates",
            template_id,
            created.len()
        );
        Ok(created)
    }

    /// Transition every pending shift to approved; returns the count
    /// transitioned
    pub fn publish(&mut self) -> usize {
        let mut count = 0;
        for shift in &mut self.shifts {
            if shift.is_pending() {
                shift.status = ShiftStatus::new(StatusKind::Approved);
                count += 1;
            }
        }
        count
    }

    /// Explicit moderation action: transition one pending shift to denied
    pub fn deny(&mut self, id: &str) -> ScheduleResult<Shift> {
        let shift = self
            .shifts
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found_error(id))?;
        if shift.status.kind != StatusKind::Pending {
            return Err(validation_error("only pending shifts can be denied"));
        }
        shift.status = ShiftStatus::new(StatusKind::Denied);
        Ok(shift.clone())
    }
}

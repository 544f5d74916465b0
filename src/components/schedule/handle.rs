use super::actor::{ScheduleActor, ScheduleActorHandle};
use super::grid::ScheduleGrid;
use super::models::{Shift, ShiftDraft, ShiftPatch};
use super::recurrence::{expand, ApplyMode};
use crate::components::team::models::TeamMember;
use crate::error::{not_found_error, ScheduleResult};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the schedule actor
#[derive(Clone)]
pub struct ScheduleHandle {
    actor_handle: ScheduleActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl ScheduleHandle {
    /// Create a new ScheduleHandle and spawn the actor
    pub fn new() -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = ScheduleActor::new();

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Create a new shift from a draft
    pub async fn create_shift(&self, draft: ShiftDraft) -> ScheduleResult<Shift> {
        self.actor_handle.create(draft).await
    }

    /// Merge a patch into an existing shift
    pub async fn update_shift(
        &self,
        id: impl Into<String>,
        patch: ShiftPatch,
    ) -> ScheduleResult<Shift> {
        self.actor_handle.update(id, patch).await
    }

    /// Remove a shift by id
    pub async fn delete_shift(&self, id: impl Into<String>) -> ScheduleResult<()> {
        self.actor_handle.delete(id).await
    }

    /// Clone a template shift onto each target date
    pub async fn bulk_copy(
        &self,
        template_id: impl Into<String>,
        target_dates: Vec<NaiveDate>,
    ) -> ScheduleResult<Vec<Shift>> {
        self.actor_handle.bulk_copy(template_id, target_dates).await
    }

    /// Transition every pending shift to approved; returns the count
    pub async fn publish(&self) -> ScheduleResult<usize> {
        self.actor_handle.publish().await
    }

    /// Transition one pending shift to denied
    pub async fn deny_shift(&self, id: impl Into<String>) -> ScheduleResult<Shift> {
        self.actor_handle.deny(id).await
    }

    /// Conflict-annotated snapshot of every shift
    pub async fn annotated_shifts(&self) -> ScheduleResult<Vec<Shift>> {
        self.actor_handle.snapshot().await
    }

    /// Project the current shifts into a grid for the given roster and days
    pub async fn project(
        &self,
        employees: Vec<TeamMember>,
        days: Vec<NaiveDate>,
    ) -> ScheduleResult<ScheduleGrid> {
        self.actor_handle.project(employees, days).await
    }

    /// Expand a template shift across days and create the results.
    ///
    /// Looks up the template, runs the recurrence expander and pipes
    /// each draft through `create_shift`. Returns the created shifts.
    pub async fn apply_recurrence(
        &self,
        template_id: &str,
        mode: ApplyMode,
        selected_days: Option<&[NaiveDate]>,
    ) -> ScheduleResult<Vec<Shift>> {
        let shifts = self.annotated_shifts().await?;
        let template = shifts
            .iter()
            .find(|s| s.id == template_id)
            .ok_or_else(|| not_found_error(template_id))?;

        let mut created = Vec::new();
        for draft in expand(template, mode, selected_days) {
            created.push(self.create_shift(draft).await?);
        }
        Ok(created)
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> ScheduleResult<()> {
        self.actor_handle.shutdown().await
    }
}

impl Default for ScheduleHandle {
    fn default() -> Self {
        Self::new()
    }
}

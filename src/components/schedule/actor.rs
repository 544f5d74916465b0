use super::conflict::annotate_conflicts;
use super::grid::{project, ScheduleGrid};
use super::models::{Shift, ShiftDraft, ShiftPatch};
use super::store::ShiftStore;
use crate::components::team::models::TeamMember;
use crate::error::{schedule_error, ScheduleResult};
use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::info;

/// The schedule actor that processes store mutations
pub struct ScheduleActor {
    store: ShiftStore,
    command_rx: mpsc::Receiver<ScheduleCommand>,
}

/// Commands that can be sent to the schedule actor
pub enum ScheduleCommand {
    Create(ShiftDraft, mpsc::Sender<ScheduleResult<Shift>>),
    Update(String, ShiftPatch, mpsc::Sender<ScheduleResult<Shift>>),
    Delete(String, mpsc::Sender<ScheduleResult<()>>),
    BulkCopy(
        String,
        Vec<NaiveDate>,
        mpsc::Sender<ScheduleResult<Vec<Shift>>>,
    ),
    Publish(mpsc::Sender<ScheduleResult<usize>>),
    Deny(String, mpsc::Sender<ScheduleResult<Shift>>),
    Snapshot(mpsc::Sender<ScheduleResult<Vec<Shift>>>),
    Project(
        Vec<TeamMember>,
        Vec<NaiveDate>,
        mpsc::Sender<ScheduleResult<ScheduleGrid>>,
    ),
    Shutdown,
}

/// Handle for communicating with the schedule actor
#[derive(Clone)]
pub struct ScheduleActorHandle {
    command_tx: mpsc::Sender<ScheduleCommand>,
}

impl ScheduleActorHandle {
    async fn send(&self, command: ScheduleCommand) -> ScheduleResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| schedule_error(&format!("Actor mailbox error: {}", e)))
    }

    async fn receive<T>(
        &self,
        response_rx: &mut mpsc::Receiver<ScheduleResult<T>>,
    ) -> ScheduleResult<T> {
        response_rx
            .recv()
            .await
            .ok_or_else(|| schedule_error("Response channel closed"))?
    }

    /// Create a new shift from a draft
    pub async fn create(&self, draft: ShiftDraft) -> ScheduleResult<Shift> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Create(draft, response_tx)).await?;
        self.receive(&mut response_rx).await
    }

    /// Merge a patch into an existing shift
    pub async fn update(&self, id: impl Into<String>, patch: ShiftPatch) -> ScheduleResult<Shift> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Update(id.into(), patch, response_tx))
            .await?;
        self.receive(&mut response_rx).await
    }

    /// Remove a shift by id
    pub async fn delete(&self, id: impl Into<String>) -> ScheduleResult<()> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Delete(id.into(), response_tx))
            .await?;
        self.receive(&mut response_rx).await
    }

    /// Clone a template shift onto each target date
    pub async fn bulk_copy(
        &self,
        template_id: impl Into<String>,
        target_dates: Vec<NaiveDate>,
    ) -> ScheduleResult<Vec<Shift>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::BulkCopy(
            template_id.into(),
            target_dates,
            response_tx,
        ))
        .await?;
        self.receive(&mut response_rx).await
    }

    /// Transition every pending shift to approved
    pub async fn publish(&self) -> ScheduleResult<usize> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Publish(response_tx)).await?;
        self.receive(&mut response_rx).await
    }

    /// Transition one pending shift to denied
    pub async fn deny(&self, id: impl Into<String>) -> ScheduleResult<Shift> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Deny(id.into(), response_tx))
            .await?;
        self.receive(&mut response_rx).await
    }

    /// Conflict-annotated snapshot of every shift, in insertion order
    pub async fn snapshot(&self) -> ScheduleResult<Vec<Shift>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Snapshot(response_tx)).await?;
        self.receive(&mut response_rx).await
    }

    /// Project the conflict-annotated shifts into a grid
    pub async fn project(
        &self,
        employees: Vec<TeamMember>,
        days: Vec<NaiveDate>,
    ) -> ScheduleResult<ScheduleGrid> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(ScheduleCommand::Project(employees, days, response_tx))
            .await?;
        self.receive(&mut response_rx).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> ScheduleResult<()> {
        let _ = self.command_tx.send(ScheduleCommand::Shutdown).await;
        Ok(())
    }
}

impl ScheduleActor {
    /// Create a new actor and return its handle
    pub fn new() -> (Self, ScheduleActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            store: ShiftStore::new(),
            command_rx,
        };

        let handle = ScheduleActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Schedule actor started");

        while let Some(command) = self.command_rx.recv().await {
            match command {
                ScheduleCommand::Create(draft, response_tx) => {
                    let result = self.store.create(draft);
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::Update(id, patch, response_tx) => {
                    let result = self.store.update(&id, patch);
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::Delete(id, response_tx) => {
                    let result = self.store.delete(&id);
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::BulkCopy(template_id, target_dates, response_tx) => {
                    let result = self.store.bulk_copy(&template_id, &target_dates);
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::Publish(response_tx) => {
                    let count = self.store.publish();
                    let _ = response_tx.send(Ok(count)).await;
                }
                ScheduleCommand::Deny(id, response_tx) => {
                    let result = self.store.deny(&id);
                    let _ = response_tx.send(result).await;
                }
                ScheduleCommand::Snapshot(response_tx) => {
                    let annotated = annotate_conflicts(self.store.shifts());
                    let _ = response_tx.send(Ok(annotated)).await;
                }
                ScheduleCommand::Project(employees, days, response_tx) => {
                    // The grid always shows conflict-annotated shifts
                    let annotated = annotate_conflicts(self.store.shifts());
                    let grid = project(&annotated, &employees, &days);
                    let _ = response_tx.send(Ok(grid)).await;
                }
                ScheduleCommand::Shutdown => {
                    info!("Schedule actor shutting down");
                    break;
                }
            }
        }

        info!("Schedule actor shut down");
    }
}

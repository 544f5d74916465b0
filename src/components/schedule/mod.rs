mod actor;
pub mod conflict;
pub mod grid;
mod handle;
pub mod models;
pub mod notifications;
pub mod recurrence;
pub mod store;
pub mod time;

pub use handle::ScheduleHandle;
pub use recurrence::ApplyMode;

use crate::config::Config;
use crate::error::ScheduleResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Schedule component owning the shift store actor
#[derive(Default)]
pub struct Schedule {
    handle: RwLock<Option<ScheduleHandle>>,
}

impl Schedule {
    /// Create a new Schedule component
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<ScheduleHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl super::Component for Schedule {
    fn name(&self) -> &'static str {
        "schedule"
    }

    async fn init(&self, _config: Arc<RwLock<Config>>) -> ScheduleResult<()> {
        // Create a new handle, spawning the actor, if one doesn't exist
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_none() {
            *handle_lock = Some(ScheduleHandle::new());
            info!("Schedule component initialized");
        }

        Ok(())
    }

    async fn shutdown(&self) -> ScheduleResult<()> {
        // Shutdown the actor if a handle exists
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }

        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

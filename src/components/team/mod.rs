pub mod models;
pub mod roster;

pub use roster::TeamRoster;

use crate::config::Config;
use crate::error::ScheduleResult;
use crate::fixtures;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Team component owning the read-only member roster
#[derive(Default)]
pub struct Team {
    roster: RwLock<Option<Arc<TeamRoster>>>,
}

impl Team {
    /// Create a new Team component
    pub fn new() -> Self {
        Self {
            roster: RwLock::new(None),
        }
    }

    /// Get the roster if the component has been initialized
    pub async fn get_roster(&self) -> Option<Arc<TeamRoster>> {
        let roster_lock = self.roster.read().await;
        roster_lock.clone()
    }
}

#[async_trait]
impl super::Component for Team {
    fn name(&self) -> &'static str {
        "team"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> ScheduleResult<()> {
        let (seed, team_size) = {
            let config = config.read().await;
            (config.fixture_seed, config.team_size)
        };

        let mut roster_lock = self.roster.write().await;
        if roster_lock.is_none() {
            let roster = fixtures::seeded_roster(seed, team_size);
            info!("Loaded roster with {} members", roster.len());
            *roster_lock = Some(Arc::new(roster));
        }

        Ok(())
    }

    async fn shutdown(&self) -> ScheduleResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

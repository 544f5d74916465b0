use crate::components::schedule::{notifications, ApplyMode, Schedule, ScheduleHandle};
use crate::components::schedule::models::ShiftDraft;
use crate::components::team::{Team, TeamRoster};
use crate::components::ComponentManager;
use crate::config::Config;
use crate::error::Error;
use crate::fixtures;
use crate::utils::time::{week_dates, week_monday, weekly_date_range};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(RwLock::new(config))),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run the scheduling demo: seed a week of shifts, copy a template
/// across the week, render the grid and publish the pending set
pub async fn run(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    // Register and initialize components
    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(Team::new());
    component_manager.register(Schedule::new());
    component_manager.init_all().await?;

    let roster = get_roster(&component_manager, Arc::clone(&config)).await;
    let schedule = get_schedule_handle(&component_manager).await;

    // Derive the current week in the configured timezone
    let (seed, default_position, tz) = {
        let config = config.read().await;
        (config.fixture_seed, config.default_position.clone(), config.tz())
    };
    let today = Utc::now().with_timezone(&tz).date_naive();
    let monday = week_monday(today);
    let days = week_dates(monday);
    let (start_date, end_date) = weekly_date_range(today);
    info!("Scheduling week {} - {}", start_date, end_date);

    // Seed the week with sample shifts
    let drafts = fixtures::seeded_shifts(seed, &roster, monday);
    let seeded = drafts.len();
    for draft in drafts {
        schedule.create_shift(draft).await?;
    }
    info!("Seeded {} shifts for the week of {}", seeded, monday);

    // Create a template shift and copy it across the rest of the week
    let mut template = ShiftDraft::new(monday, "09:00", "17:00", default_position);
    template.employee_id = roster.members().first().map(|m| m.id.clone());
    let template = schedule.create_shift(template).await?;
    let copies = schedule
        .apply_recurrence(&template.id, ApplyMode::WholeWeek, None)
        .await?;
    info!(
        "Copied shift {} across the week: {} copies",
        template.id,
        copies.len()
    );

    // Project and render the conflict-annotated grid
    let grid = schedule
        .project(roster.members().to_vec(), days.clone())
        .await?;
    println!("{}", grid.render_text(roster.members()));

    // Publish everything pending and report per employee
    let pending: Vec<_> = schedule
        .annotated_shifts()
        .await?
        .into_iter()
        .filter(|s| s.is_pending())
        .collect();
    let published = schedule.publish().await?;
    info!("Published {} shifts", published);
    for line in notifications::publish_summaries(&pending, &roster) {
        info!("{}", line);
    }

    component_manager.shutdown_all().await?;
    Ok(())
}

/// Helper to get the team roster, falling back to a standalone fixture
/// roster when the component is unavailable
async fn get_roster(
    component_manager: &ComponentManager,
    config: Arc<RwLock<Config>>,
) -> Arc<TeamRoster> {
    if let Some(component) = component_manager.get_component_by_name("team") {
        if let Some(team) = component.as_any().downcast_ref::<Team>() {
            if let Some(roster) = team.get_roster().await {
                debug!("Using roster from Team component");
                return roster;
            }
        }
    }

    debug!("Team component not available, building standalone roster");
    let (seed, team_size) = {
        let config = config.read().await;
        (config.fixture_seed, config.team_size)
    };
    Arc::new(fixtures::seeded_roster(seed, team_size))
}

/// Helper to get the schedule handle, falling back to a standalone actor
async fn get_schedule_handle(component_manager: &ComponentManager) -> ScheduleHandle {
    if let Some(component) = component_manager.get_component_by_name("schedule") {
        if let Some(schedule) = component.as_any().downcast_ref::<Schedule>() {
            if let Some(handle) = schedule.get_handle().await {
                debug!("Using handle from Schedule component");
                return handle;
            }
        }
    }

    debug!("Schedule component not available, creating standalone handle");
    ScheduleHandle::new()
}

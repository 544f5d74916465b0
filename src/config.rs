use crate::error::{config_error, env_error, ScheduleResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;

/// Default seed for deterministic sample data
pub const DEFAULT_FIXTURE_SEED: u64 = 2024;

/// Default number of generated team members
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// Default position label for fixtures
pub const DEFAULT_POSITION: &str = "Cashier";

/// Main configuration structure for the scheduler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone that anchors "today" and the scheduling week
    pub timezone: String,
    /// Seed for deterministic fixture generation
    pub fixture_seed: u64,
    /// Number of team members in the generated roster
    pub team_size: usize,
    /// Fallback position label used by fixtures
    pub default_position: String,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> ScheduleResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let timezone = env::var("SCHEDULE_TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        // Validate against the tz database up front
        timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", timezone)))?;

        let fixture_seed = match env::var("FIXTURE_SEED") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| env_error("Invalid FIXTURE_SEED format"))?,
            Err(_) => DEFAULT_FIXTURE_SEED,
        };

        let team_size = match env::var("TEAM_SIZE") {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|_| env_error("Invalid TEAM_SIZE format"))?,
            Err(_) => DEFAULT_TEAM_SIZE,
        };

        let default_position =
            env::var("DEFAULT_POSITION").unwrap_or_else(|_| String::from(DEFAULT_POSITION));

        // Initialize default components
        let mut components = HashMap::new();
        components.insert("team".to_string(), true);
        components.insert("schedule".to_string(), true);

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/components.toml") {
            let file_components: HashMap<String, bool> = toml::from_str(&content)?;
            // Merge with defaults
            for (key, value) in file_components {
                components.insert(key, value);
            }
        }

        Ok(Config {
            timezone,
            fixture_seed,
            team_size,
            default_position,
            components,
        })
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }

    /// Parsed timezone, falling back to UTC
    pub fn tz(&self) -> chrono_tz::Tz {
        self.timezone.parse().unwrap_or(chrono_tz::Tz::UTC)
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut components = HashMap::new();
        components.insert("team".to_string(), true);
        components.insert("schedule".to_string(), true);

        Self {
            timezone: String::from("UTC"),
            fixture_seed: DEFAULT_FIXTURE_SEED,
            team_size: DEFAULT_TEAM_SIZE,
            default_position: String::from(DEFAULT_POSITION),
            components,
        }
    }
}

use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::slot_utils::{calculate_time_slots, parse_time};
use crate::schedule::GridModel;

/// Env var naming a JSON file that overrides the default catalogs
pub const CONFIG_ENV_VAR: &str = "MEETING_SCHEDULER_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("day end {end} is before day start {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("slot interval must be at least one minute")]
    ZeroInterval,

    #[error("at least one room is required")]
    NoRooms,

    #[error("room {0:?} is listed more than once")]
    DuplicateRoom(String),
}

/// Room and time-slot catalogs for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub day_start: String,
    pub day_end: String,
    pub slot_minutes: u32,
    pub rooms: Vec<String>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            day_start: "8:00".to_string(),
            day_end: "20:00".to_string(),
            slot_minutes: 60,
            rooms: [
                "Room A", "Room B", "Room C", "Room D",
                "Room E", "Room F", "Room G", "Room H",
                "Conference Hall 1", "Conference Hall 2",
                "Meeting Room 1", "Meeting Room 2",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
        }
    }
}

impl SchedulerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Uses the file named by `MEETING_SCHEDULER_CONFIG`, or the defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                info!("Loading scheduler config from {}", path);
                Self::from_file(Path::new(&path))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn time_slots(&self) -> Result<Vec<String>, ConfigError> {
        let start = parse_time(&self.day_start)
            .ok_or_else(|| ConfigError::InvalidTime(self.day_start.clone()))?;
        let end = parse_time(&self.day_end)
            .ok_or_else(|| ConfigError::InvalidTime(self.day_end.clone()))?;
        if end < start {
            return Err(ConfigError::EndBeforeStart {
                start: self.day_start.clone(),
                end: self.day_end.clone(),
            });
        }
        if self.slot_minutes == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(calculate_time_slots(start, end, self.slot_minutes))
    }

    /// Validates the catalogs and builds an empty grid from them
    pub fn build_grid(&self) -> Result<GridModel, ConfigError> {
        if self.rooms.is_empty() {
            return Err(ConfigError::NoRooms);
        }
        let mut seen = HashSet::new();
        for room in &self.rooms {
            if !seen.insert(room.as_str()) {
                return Err(ConfigError::DuplicateRoom(room.clone()));
            }
        }
        let time_slots = self.time_slots()?;
        Ok(GridModel::new(self.rooms.clone(), time_slots))
    }
}

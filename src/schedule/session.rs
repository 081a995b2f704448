use log::{info, warn};
use crate::parser::{parse_duration, parse_start_time};
use super::allocator::allocate;
use super::grid::GridModel;
use super::projector::generate_optimal_schedule;
use super::types::{Allocation, Placement, ScheduleError};

const DEFAULT_DURATION: usize = 1;

/// One user's scheduling session: the grid plus the duration last entered,
/// which the optimal layout reuses.
#[derive(Debug, Clone)]
pub struct SchedulerSession {
    grid: GridModel,
    current_duration: usize,
}

impl SchedulerSession {
    pub fn new(grid: GridModel) -> Self {
        SchedulerSession {
            grid,
            current_duration: DEFAULT_DURATION,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn current_duration(&self) -> usize {
        self.current_duration
    }

    /// Validates a duration entry and makes it the current duration
    pub fn set_duration(&mut self, duration_input: &str) -> Result<usize, ScheduleError> {
        let duration = parse_duration(duration_input, self.grid.slot_count())?;
        self.current_duration = duration;
        Ok(duration)
    }

    /// Validates the raw inputs and books the first free window.
    ///
    /// The start time has to be picked from the catalog but does not steer
    /// the search. A valid duration is remembered even when booking fails.
    pub fn schedule_meeting(
        &mut self,
        duration_input: &str,
        start_time: Option<&str>,
    ) -> Result<Allocation, ScheduleError> {
        let duration = self.set_duration(duration_input)?;
        let requested = parse_start_time(start_time, self.grid.time_slots())?;

        let allocation = allocate(&mut self.grid, duration)?;
        if allocation.start_time != requested {
            info!(
                "Requested start {} ignored, meeting placed at {}",
                requested, allocation.start_time
            );
        }
        Ok(allocation)
    }

    /// Replaces the schedule with the N-Queens layout for the current duration
    pub fn generate_optimal(&mut self) -> Result<Placement, ScheduleError> {
        generate_optimal_schedule(&mut self.grid, self.current_duration).map_err(|e| {
            warn!("Optimal schedule failed: {}", e);
            e
        })
    }

    /// Clears every meeting. The current duration survives, so the next
    /// optimal layout still uses the last duration entered.
    pub fn clear(&mut self) {
        self.grid.reset();
        info!("Schedule cleared");
    }
}

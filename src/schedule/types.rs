use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A meeting placed by the first-fit allocator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub room: String,
    pub start_time: String,
    pub start_index: usize,
    pub duration: usize,
}

/// One N-Queens solution, stored as the queen's column for every row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    columns: Vec<usize>, // row -> column
}

impl Placement {
    pub(crate) fn from_columns(columns: Vec<usize>) -> Self {
        Placement { columns }
    }

    /// Board dimension the placement was solved for
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// Iterates queens as (row, column) pairs in row order
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }

    /// Expands the placement back into an N×N board of queen markers
    pub fn to_board(&self) -> Vec<Vec<bool>> {
        let n = self.size();
        self.columns
            .iter()
            .map(|&col| (0..n).map(|c| c == col).collect())
            .collect()
    }
}

/// Every negative outcome the scheduler can report. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Please enter a valid duration (1-{max} hours), got {input:?}")]
    InvalidDuration { input: String, max: usize },

    #[error("Please select a start time")]
    MissingStartTime,

    #[error("Unknown start time {0:?}")]
    UnknownStartTime(String),

    #[error("Unknown room {0:?}")]
    UnknownRoom(String),

    #[error("No available slots for a meeting of duration {duration}")]
    NoAvailableSlot { duration: usize },

    #[error("No queen placement exists for a board of size {n}")]
    NoSolution { n: usize },
}

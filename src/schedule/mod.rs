pub mod types;
pub mod slot_utils;
pub mod grid;
pub mod allocator;
pub mod queens;
pub mod projector;
pub mod session;

pub use types::{Allocation, Placement, ScheduleError};
pub use grid::GridModel;
pub use allocator::allocate;
pub use queens::solve;
pub use projector::{generate_optimal_schedule, project};
pub use session::SchedulerSession;

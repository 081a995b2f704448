use log::{debug, info};
use super::grid::GridModel;
use super::types::{Allocation, ScheduleError};

/// First-fit allocation: rooms in catalog order, then start slots in
/// chronological order. The first free window is reserved and returned.
///
/// A duration longer than the whole day is rejected without searching.
/// On `NoAvailableSlot` the grid is left untouched.
pub fn allocate(grid: &mut GridModel, duration: usize) -> Result<Allocation, ScheduleError> {
    let slot_count = grid.slot_count();
    if duration == 0 {
        return Err(ScheduleError::InvalidDuration {
            input: duration.to_string(),
            max: slot_count,
        });
    }
    if duration > slot_count {
        info!("Duration {} exceeds available time slots", duration);
        return Err(ScheduleError::NoAvailableSlot { duration });
    }

    info!("Attempting to schedule meeting with duration {}", duration);

    for room_index in 0..grid.rooms().len() {
        for start_index in 0..=(slot_count - duration) {
            if grid.is_available_at(room_index, start_index, duration) {
                grid.reserve_at(room_index, start_index, duration);
                let allocation = Allocation {
                    room: grid.rooms()[room_index].clone(),
                    start_time: grid.time_slots()[start_index].clone(),
                    start_index,
                    duration,
                };
                info!(
                    "Scheduled meeting in {} starting at {}",
                    allocation.room, allocation.start_time
                );
                return Ok(allocation);
            }
        }
        debug!("{} has no free window of {} slot(s)", grid.rooms()[room_index], duration);
    }

    info!("No available slots found");
    Err(ScheduleError::NoAvailableSlot { duration })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;

    fn default_grid() -> GridModel {
        SchedulerConfig::default().build_grid().unwrap()
    }

    #[test]
    fn every_valid_duration_lands_in_first_room_at_first_slot() {
        let mut grid = default_grid();
        for d in 1..=grid.slot_count() {
            grid.reset();
            let allocation = allocate(&mut grid, d).unwrap();
            assert_eq!(allocation.room, "Room A");
            assert_eq!(allocation.start_index, 0);
            assert_eq!(allocation.start_time, "8:00");
            assert_eq!(allocation.duration, d);
            assert_eq!(grid.reserved_count(), d);
        }
    }

    #[test]
    fn too_long_duration_is_rejected_without_touching_the_grid() {
        let mut grid = default_grid();
        grid.reserve("Room C", 4, 2).unwrap();
        let before = grid.clone();

        assert_eq!(
            allocate(&mut grid, 14),
            Err(ScheduleError::NoAvailableSlot { duration: 14 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn zero_duration_is_invalid() {
        let mut grid = default_grid();
        assert!(matches!(
            allocate(&mut grid, 0),
            Err(ScheduleError::InvalidDuration { max: 13, .. })
        ));
        assert!(grid.is_empty());
    }

    #[test]
    fn allocated_window_becomes_unavailable() {
        let mut grid = default_grid();
        let allocation = allocate(&mut grid, 3).unwrap();

        assert!(!grid.is_available(&allocation.room, allocation.start_index, 3));
        assert!(grid.is_available(&allocation.room, allocation.start_index + 3, 3));
    }

    #[test]
    fn consecutive_meetings_fill_a_room_in_time_order() {
        let mut grid = default_grid();
        let first = allocate(&mut grid, 4).unwrap();
        let second = allocate(&mut grid, 4).unwrap();
        let third = allocate(&mut grid, 4).unwrap();
        let fourth = allocate(&mut grid, 4).unwrap();

        assert_eq!((first.room.as_str(), first.start_time.as_str()), ("Room A", "8:00"));
        assert_eq!((second.room.as_str(), second.start_time.as_str()), ("Room A", "12:00"));
        assert_eq!((third.room.as_str(), third.start_time.as_str()), ("Room A", "16:00"));
        // only one slot left in Room A
        assert_eq!((fourth.room.as_str(), fourth.start_time.as_str()), ("Room B", "8:00"));
    }

    #[test]
    fn full_room_is_skipped() {
        let mut grid = default_grid();
        grid.reserve("Room A", 0, 13).unwrap();

        let allocation = allocate(&mut grid, 1).unwrap();
        assert_eq!(allocation.room, "Room B");
        assert_eq!(allocation.start_time, "8:00");
    }

    #[test]
    fn fragmented_room_is_skipped_when_no_gap_fits() {
        let mut grid = default_grid();
        grid.reserve("Room A", 2, 1).unwrap();
        grid.reserve("Room A", 6, 1).unwrap();
        grid.reserve("Room A", 10, 1).unwrap();

        let allocation = allocate(&mut grid, 3).unwrap();
        assert_eq!((allocation.room.as_str(), allocation.start_index), ("Room A", 3));

        let allocation = allocate(&mut grid, 3).unwrap();
        assert_eq!((allocation.room.as_str(), allocation.start_index), ("Room A", 7));

        let allocation = allocate(&mut grid, 3).unwrap();
        assert_eq!((allocation.room.as_str(), allocation.start_index), ("Room B", 0));
    }

    #[test]
    fn exhausted_grid_reports_no_slot_and_stays_unchanged() {
        let mut grid = default_grid();
        for room in grid.rooms().to_vec() {
            grid.reserve(&room, 0, 7).unwrap();
        }
        let before = grid.clone();

        assert_eq!(
            allocate(&mut grid, 7),
            Err(ScheduleError::NoAvailableSlot { duration: 7 })
        );
        assert_eq!(grid, before);
        assert!(allocate(&mut grid, 6).is_ok());
    }
}

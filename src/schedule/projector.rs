use log::{debug, info};
use super::grid::GridModel;
use super::queens::solve;
use super::types::{Placement, ScheduleError};

/// Turns a queen placement into reservations: row `r` is the r-th room, and
/// its queen's column is the start slot. Meetings running past the last slot
/// are clipped. Expects a freshly reset grid.
pub fn project(placement: &Placement, grid: &mut GridModel, duration: usize) {
    let slot_count = grid.slot_count();
    let room_count = grid.rooms().len();

    for (row, col) in placement.queens().take(room_count) {
        // more rooms than slots: the queen is off the schedule
        if col >= slot_count {
            debug!("{} has no start slot (column {})", grid.rooms()[row], col);
            continue;
        }
        let length = duration.min(slot_count - col);
        grid.reserve_at(row, col, length);
        debug!(
            "Projected {} at {} for {} slot(s)",
            grid.rooms()[row],
            grid.time_slots()[col],
            length
        );
    }
}

/// Solves N-Queens for the room count and, on success, replaces the whole
/// schedule with the projected layout. On `NoSolution` the grid is untouched.
pub fn generate_optimal_schedule(grid: &mut GridModel, duration: usize) -> Result<Placement, ScheduleError> {
    let n = grid.rooms().len();
    let placement = solve(n).ok_or(ScheduleError::NoSolution { n })?;

    grid.reset();
    project(&placement, grid, duration);
    info!(
        "Generated optimal schedule for {} rooms with duration {} ({} slots reserved)",
        n,
        duration,
        grid.reserved_count()
    );

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;

    fn grid_with_rooms(count: usize) -> GridModel {
        let config = SchedulerConfig {
            rooms: (1..=count).map(|i| format!("Room {}", i)).collect(),
            ..SchedulerConfig::default()
        };
        config.build_grid().unwrap()
    }

    #[test]
    fn twelve_rooms_start_at_their_queen_column() {
        let mut grid = SchedulerConfig::default().build_grid().unwrap();
        grid.reset();
        let placement = solve(12).unwrap();
        project(&placement, &mut grid, 3);

        for (row, room) in grid.rooms().iter().enumerate() {
            let start = placement.column_for_row(row).unwrap();
            let expected: Vec<&str> = grid.time_slots()[start..start + 3usize.min(13 - start)]
                .iter()
                .map(String::as_str)
                .collect();
            assert_eq!(grid.reserved_slots(room).unwrap(), expected, "{}", room);
        }
    }

    #[test]
    fn twelve_room_layout_matches_first_solution() {
        let mut grid = SchedulerConfig::default().build_grid().unwrap();
        let placement = generate_optimal_schedule(&mut grid, 1).unwrap();

        let starts: Vec<&str> = grid
            .rooms()
            .iter()
            .map(|room| grid.reserved_slots(room).unwrap()[0])
            .collect();
        assert_eq!(
            starts,
            vec!["8:00", "16:00", "9:00", "19:00", "10:00", "14:00", "17:00", "11:00", "18:00", "12:00", "15:00", "13:00"]
        );
        assert_eq!(placement.size(), 12);
    }

    #[test]
    fn long_meetings_are_clipped_at_the_last_slot() {
        let mut grid = SchedulerConfig::default().build_grid().unwrap();
        generate_optimal_schedule(&mut grid, 13).unwrap();

        // Room D's queen is in column 11
        assert_eq!(grid.reserved_slots("Room D").unwrap(), vec!["19:00", "20:00"]);
        // Room A's queen is in column 0
        assert_eq!(grid.reserved_slots("Room A").unwrap().len(), 13);
    }

    #[test]
    fn optimal_schedule_replaces_existing_meetings() {
        let mut grid = SchedulerConfig::default().build_grid().unwrap();
        grid.reserve("Room B", 0, 13).unwrap();

        generate_optimal_schedule(&mut grid, 2).unwrap();
        assert_eq!(grid.reserved_slots("Room B").unwrap(), vec!["16:00", "17:00"]);
        // latest queen column is 11, so no two-slot meeting needs clipping
        assert_eq!(grid.reserved_count(), 24);
    }

    #[test]
    fn unsolvable_room_count_leaves_grid_alone() {
        let mut grid = grid_with_rooms(3);
        grid.reserve("Room 2", 5, 2).unwrap();
        let before = grid.clone();

        assert_eq!(
            generate_optimal_schedule(&mut grid, 2),
            Err(ScheduleError::NoSolution { n: 3 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn queens_beyond_the_last_slot_leave_the_room_empty() {
        let mut grid = grid_with_rooms(14);
        generate_optimal_schedule(&mut grid, 1).unwrap();

        // 14-queens puts row 10 in column 13, one past the 13 slots
        assert_eq!(grid.reserved_slots("Room 11").unwrap(), Vec::<&str>::new());
        assert_eq!(grid.reserved_slots("Room 1").unwrap(), vec!["8:00"]);
        assert_eq!(grid.reserved_count(), 13);
    }
}

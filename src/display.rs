use std::fs::File;
use std::io::Write;
use crate::schedule::{Allocation, GridModel, Placement};

const CELL_WIDTH: usize = 6;

/// Formats an allocation the way the scheduling dialog reports it
pub fn format_allocation(allocation: &Allocation) -> String {
    format!(
        "Meeting scheduled in {} at {} for {} hour(s)",
        allocation.room, allocation.start_time, allocation.duration
    )
}

fn room_column_width(grid: &GridModel) -> usize {
    grid.rooms().iter().map(|r| r.chars().count()).max().unwrap_or(0).max(4)
}

/// Renders the grid as a room × time table, `[##]` marking reserved cells
pub fn render_grid(grid: &GridModel) -> String {
    let width = room_column_width(grid);
    let mut out = String::new();

    out.push_str(&format!("{:width$}", "", width = width));
    for label in grid.time_slots() {
        out.push_str(&format!(" {:>cell$}", label, cell = CELL_WIDTH));
    }
    out.push('\n');

    for (room_index, room) in grid.rooms().iter().enumerate() {
        out.push_str(&format!("{:width$}", room, width = width));
        for slot_index in 0..grid.slot_count() {
            let cell = if grid.is_reserved(room_index, slot_index) { "[##]" } else { "[  ]" };
            out.push_str(&format!(" {:>cell$}", cell, cell = CELL_WIDTH));
        }
        out.push('\n');
    }

    out
}

/// Occupancy chart: checkerboard background (`.` and space), `Q` where a
/// meeting starts and `#` on the rest of its slots
pub fn render_chart(grid: &GridModel, duration: usize) -> String {
    let width = room_column_width(grid);
    let mut out = format!("Meeting Schedule Visualization\nDuration: {} hours\n\n", duration);

    for (room_index, room) in grid.rooms().iter().enumerate() {
        out.push_str(&format!("{:>width$} |", room, width = width));
        for slot_index in 0..grid.slot_count() {
            let reserved = grid.is_reserved(room_index, slot_index);
            let mark = if grid.is_meeting_start(room_index, slot_index) {
                'Q'
            } else if reserved {
                '#'
            } else if (room_index + slot_index) % 2 == 0 {
                '.'
            } else {
                ' '
            };
            out.push(' ');
            out.push(mark);
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>width$} +", "", width = width));
    out.push_str(&"--".repeat(grid.slot_count()));
    out.push('\n');
    for label in grid.time_slots() {
        out.push_str(&format!("{:>width$}   {}\n", "", label, width = width));
    }

    out
}

/// Renders a placement as an N×N board
pub fn render_board(placement: &Placement) -> String {
    placement
        .to_board()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&queen| if queen { "Q" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the grid with a title and reservation count
pub fn print_grid(title: &str, grid: &GridModel) {
    println!("\n=== {} ===", title);
    println!("Reserved slots: {}", grid.reserved_count());
    print!("{}", render_grid(grid));
}

/// Writes the grid to a file, one line per room: `Room: slot slot ...`
pub fn write_grid_to_file(
    title: &str,
    grid: &GridModel,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** {} **", title)?;

    for room in grid.rooms() {
        let reserved = grid.reserved_slots(room).unwrap_or_default();
        if reserved.is_empty() {
            writeln!(file, "{}: [EMPTY]", room)?;
        } else {
            writeln!(file, "{}: {}", room, reserved.join(" "))?;
        }
    }

    Ok(())
}
